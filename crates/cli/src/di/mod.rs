use dnsprobe_application::use_cases::ExecuteCheckUseCase;
use dnsprobe_infrastructure::check_executor;
use std::sync::Arc;

/// Use cases wired to their production adapters.
pub struct UseCases {
    pub execute_check: Arc<ExecuteCheckUseCase>,
}

impl UseCases {
    pub fn new() -> Self {
        Self {
            execute_check: Arc::new(check_executor()),
        }
    }
}

impl Default for UseCases {
    fn default() -> Self {
        Self::new()
    }
}

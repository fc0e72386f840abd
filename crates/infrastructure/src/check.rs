use dnsprobe_application::use_cases::ExecuteCheckUseCase;
use dnsprobe_application::CheckContext;
use dnsprobe_domain::{CheckConfig, CheckError};
use std::sync::Arc;

use crate::dns::TargetedResolverFactory;

/// Build the executor wired to the real network.
pub fn check_executor() -> ExecuteCheckUseCase {
    ExecuteCheckUseCase::new(Arc::new(TargetedResolverFactory::new()))
}

/// Plugin entry for host frameworks: run one check described by a JSON blob.
///
/// Returns `Ok(())` only when the expected value was found.
pub async fn run_check(ctx: &CheckContext, config: &str) -> Result<(), CheckError> {
    let config = CheckConfig::from_json(config)?;
    check_executor().execute(&config, ctx).await
}

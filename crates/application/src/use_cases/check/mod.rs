mod execute;

pub use execute::ExecuteCheckUseCase;

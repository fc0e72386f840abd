//! dnsprobe application layer
pub mod context;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use context::CheckContext;

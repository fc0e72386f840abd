//! Configuration for a single DNS check
//!
//! - `check`: the check definition (`CheckConfig`) and its serialized form
//! - `logging`: logging settings for the binary
//! - `errors`: configuration errors

pub mod check;
pub mod errors;
pub mod logging;

pub use check::{CheckConfig, CheckConfigFile, DEFAULT_PORT};
pub use errors::ConfigError;
pub use logging::LoggingConfig;

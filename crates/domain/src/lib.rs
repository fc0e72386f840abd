//! dnsprobe domain layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod validators;

pub use config::{CheckConfig, CheckConfigFile, ConfigError, LoggingConfig, DEFAULT_PORT};
pub use dns_record::RecordType;
pub use errors::{CheckError, ErrorKind, ResolutionError};

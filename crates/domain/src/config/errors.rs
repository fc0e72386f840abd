use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field {0} cannot be empty")]
    EmptyField(&'static str),

    #[error("port {0} out of range (1-65535)")]
    PortOutOfRange(i64),

    #[error("unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("failed to read configuration file {path}: {message}")]
    Io { path: String, message: String },
}

use crate::config::ConfigError;
use thiserror::Error;

/// Failures of the lookup itself. Surfaced verbatim to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("timeout querying {server}")]
    Timeout { server: String },

    #[error("lookup cancelled")]
    Cancelled,

    #[error("I/O error talking to {server}: {message}")]
    Io { server: String, message: String },

    #[error("cannot resolve DNS server address {server}: {message}")]
    ServerLookup { server: String, message: String },

    #[error("invalid domain name {name:?}: {message}")]
    InvalidName { name: String, message: String },

    #[error("unrecognized address for reverse lookup: {0}")]
    InvalidReverseAddress(String),

    #[error("lookup {domain} on {server}: no such host")]
    NxDomain { domain: String, server: String },

    #[error("lookup {domain} on {server}: no {record_type} records")]
    NoRecords {
        domain: String,
        server: String,
        record_type: String,
    },

    #[error("lookup {domain} on {server}: server responded with {rcode}")]
    ServerFailure {
        domain: String,
        server: String,
        rcode: String,
    },

    #[error("malformed DNS response from {server}: {message}")]
    MalformedResponse { server: String, message: String },
}

/// Coarse classification a host uses to tell failures apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Resolution,
    MatchFailure,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("deadline not set")]
    DeadlineNotSet,

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("expected output {expected:?} not found in [{}]", .actual.join(", "))]
    MatchFailure {
        expected: String,
        actual: Vec<String>,
    },
}

impl CheckError {
    /// A missing deadline is an integration mistake, so it reports as config.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::Config(_) | CheckError::DeadlineNotSet => ErrorKind::Config,
            CheckError::Resolution(_) => ErrorKind::Resolution,
            CheckError::MatchFailure { .. } => ErrorKind::MatchFailure,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            CheckError::Resolution(ResolutionError::Timeout { .. })
        )
    }
}

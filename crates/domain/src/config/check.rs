use serde::{Deserialize, Serialize};
use std::net::Ipv6Addr;
use std::path::Path;
use std::str::FromStr;

use super::errors::ConfigError;
use crate::dns_record::RecordType;
use crate::validators::{validate_non_empty, validate_port};

pub const DEFAULT_PORT: u16 = 53;

/// Serialized form of a check, as handed over by the host framework.
///
/// Every field is optional here so that a missing key reports as
/// `MissingField` instead of an opaque parse error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckConfigFile {
    /// DNS server to query directly (hostname or IP)
    #[serde(default, alias = "target")]
    pub server: Option<String>,

    #[serde(default = "default_port")]
    pub port: i64,

    #[serde(default = "default_record", alias = "record_type")]
    pub record: String,

    #[serde(default)]
    pub domain: Option<String>,

    #[serde(default)]
    pub expected_output: Option<String>,
}

impl Default for CheckConfigFile {
    fn default() -> Self {
        Self {
            server: None,
            port: default_port(),
            record: default_record(),
            domain: None,
            expected_output: None,
        }
    }
}

fn default_port() -> i64 {
    DEFAULT_PORT as i64
}

fn default_record() -> String {
    RecordType::default().as_str().to_string()
}

impl CheckConfigFile {
    pub fn validate(self) -> Result<CheckConfig, ConfigError> {
        CheckConfig::try_from(self)
    }
}

/// A validated check definition. Cannot be built without passing validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    server: String,
    port: u16,
    record_type: RecordType,
    domain: String,
    expected_output: String,
}

impl CheckConfig {
    pub fn new(
        server: impl Into<String>,
        port: u16,
        record_type: RecordType,
        domain: impl Into<String>,
        expected_output: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let server = server.into();
        let domain = domain.into();
        let expected_output = expected_output.into();

        validate_non_empty("server", &server)?;
        let port = validate_port(port as i64)?;
        validate_non_empty("domain", &domain)?;
        validate_non_empty("expected_output", &expected_output)?;

        Ok(Self {
            server,
            port,
            record_type,
            domain,
            expected_output,
        })
    }

    /// Parse and validate a JSON configuration blob.
    pub fn from_json(blob: &str) -> Result<Self, ConfigError> {
        let file: CheckConfigFile =
            serde_json::from_str(blob).map_err(|e| ConfigError::Parse(e.to_string()))?;
        file.validate()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        let file: CheckConfigFile =
            toml::from_str(document).map_err(|e| ConfigError::Parse(e.to_string()))?;
        file.validate()
    }

    /// Load from disk; `.toml` files are TOML, anything else is JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml(&contents),
            _ => Self::from_json(&contents),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn expected_output(&self) -> &str {
        &self.expected_output
    }

    /// `server:port`, with IPv6 literals bracketed.
    pub fn endpoint(&self) -> String {
        match Ipv6Addr::from_str(&self.server) {
            Ok(_) => format!("[{}]:{}", self.server, self.port),
            Err(_) => format!("{}:{}", self.server, self.port),
        }
    }
}

impl TryFrom<CheckConfigFile> for CheckConfig {
    type Error = ConfigError;

    fn try_from(file: CheckConfigFile) -> Result<Self, Self::Error> {
        let server = file.server.ok_or(ConfigError::MissingField("server"))?;
        let domain = file.domain.ok_or(ConfigError::MissingField("domain"))?;
        let expected_output = file
            .expected_output
            .ok_or(ConfigError::MissingField("expected_output"))?;

        let port = validate_port(file.port)?;
        let record_type = RecordType::from_str(&file.record)
            .map_err(|_| ConfigError::UnsupportedRecordType(file.record.clone()))?;

        Self::new(server, port, record_type, domain, expected_output)
    }
}

use clap::Args;
use dnsprobe_domain::{CheckConfig, CheckConfigFile, ConfigError};
use std::path::PathBuf;
use tracing::info;

/// Where the check definition comes from: an inline JSON blob, a file, or
/// individual flags.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Inline JSON configuration blob
    #[arg(
        long,
        conflicts_with_all = ["config_file", "server", "port", "record", "domain", "expected"]
    )]
    pub config: Option<String>,

    /// Configuration file (.toml is parsed as TOML, anything else as JSON)
    #[arg(
        long,
        value_name = "PATH",
        conflicts_with_all = ["server", "port", "record", "domain", "expected"]
    )]
    pub config_file: Option<PathBuf>,

    /// DNS server to query (hostname or IP)
    #[arg(short = 's', long)]
    pub server: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    pub port: Option<i64>,

    /// Record type: A, AAAA, CNAME, MX, NS, PTR or TXT
    #[arg(short = 'r', long)]
    pub record: Option<String>,

    /// Name to resolve, or address for PTR
    #[arg(short = 'd', long)]
    pub domain: Option<String>,

    /// Value that must appear in the answer set
    #[arg(short = 'e', long)]
    pub expected: Option<String>,
}

impl ConfigArgs {
    fn to_file(&self) -> CheckConfigFile {
        let defaults = CheckConfigFile::default();
        CheckConfigFile {
            server: self.server.clone(),
            port: self.port.unwrap_or(defaults.port),
            record: self.record.clone().unwrap_or(defaults.record),
            domain: self.domain.clone(),
            expected_output: self.expected.clone(),
        }
    }
}

pub fn load_config(args: &ConfigArgs) -> Result<CheckConfig, ConfigError> {
    let (source, config) = if let Some(blob) = &args.config {
        ("inline", CheckConfig::from_json(blob)?)
    } else if let Some(path) = &args.config_file {
        ("file", CheckConfig::load(path)?)
    } else {
        ("flags", args.to_file().validate()?)
    };

    info!(
        source,
        server = config.server(),
        port = config.port(),
        record_type = %config.record_type(),
        domain = config.domain(),
        "Configuration loaded"
    );

    Ok(config)
}

//! # dnsprobe
//!
//! Single-shot DNS assertion: query one server directly and pass only if the
//! expected value is among the answers.

mod bootstrap;
mod di;

use anyhow::Context;
use bootstrap::{init_logging, load_config, ConfigArgs};
use clap::Parser;
use di::UseCases;
use dnsprobe_application::CheckContext;
use dnsprobe_domain::{CheckError, ErrorKind, LoggingConfig};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "dnsprobe")]
#[command(version)]
#[command(about = "Assert that a DNS server answers with an expected value")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Deadline for the whole check, in seconds
    #[arg(
        short = 't',
        long,
        default_value = "5",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Log level: trace, debug, info, warn, error (RUST_LOG overrides)
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,
}

const EXIT_MATCH_FAILURE: u8 = 1;
const EXIT_RESOLUTION_FAILURE: u8 = 2;
const EXIT_CONFIG_ERROR: u8 = 3;

fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::MatchFailure => EXIT_MATCH_FAILURE,
        ErrorKind::Resolution => EXIT_RESOLUTION_FAILURE,
        ErrorKind::Config => EXIT_CONFIG_ERROR,
    }
}

/// Bootstrap failures that never reached the check report as config errors.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CheckError>()
        .map(|e| exit_code(e.kind()))
        .unwrap_or(EXIT_CONFIG_ERROR)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli.config)
        .map_err(CheckError::from)
        .context("invalid check configuration")?;

    let ctx = CheckContext::with_timeout(Duration::from_secs(cli.timeout));

    let token = ctx.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling check");
            token.cancel();
        }
    });

    let use_cases = UseCases::new();
    use_cases.execute_check.execute(&config, &ctx).await?;

    debug!(endpoint = %config.endpoint(), "Check finished");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors share the config exit code; --help and --version succeed.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_CONFIG_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(&LoggingConfig {
        level: cli.log_level.clone(),
    });

    match run(cli).await {
        Ok(()) => {
            println!("ok");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("dnsprobe: {:#}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

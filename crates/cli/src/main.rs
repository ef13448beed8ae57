//! Akyl Jer CLI - scripting access to the portal backend.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute portal REST calls through the shared client library.
//! - Format results as table, JSON, CSV or YAML.
//!
//! Does NOT handle:
//! - HTTP details or response models (see `crates/client`).
//! - Interactive browsing (see `crates/tui`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use akyljer_config::ConfigLoader;
use args::{Cli, LogFormat};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    init_logging(cli.log_format);

    let mut loader = match ConfigLoader::new().from_env() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to load configuration from environment: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }

    let config = match loader.build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match run_command(cli, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e.exit_code();
            if code.is_retryable() {
                tracing::warn!(
                    exit_code = code.as_i32(),
                    "failure is transient, retrying may succeed"
                );
            }
            code
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn init_logging(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

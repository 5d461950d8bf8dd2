//! check-es-logs-count
//!
//! Run with: check-es-logs-count --threshold 100 [--compare-operator gt]
//!
//! Environment variables:
//! - RUST_LOG: Log level, written to stderr (default: check_es_logs_count=warn)
//!
//! The status line goes to stdout; the exit code is 0 (OK), 2 (CRITICAL) or
//! 3 (UNKNOWN).

use std::process::ExitCode;

use check_es_logs_count::cli::{self, usage_error_verdict, CliArgs};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the status line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "check_es_logs_count=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let verdict = match CliArgs::try_parse() {
        Ok(args) => cli::run(args).await,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => usage_error_verdict(&e),
    };

    println!("{}", verdict);
    verdict.status.exit_code()
}

//! Storewatch CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use storewatch::cli::Cli;
use storewatch::config::Config;
use storewatch::runner;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("storewatch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("storewatch=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Storewatch starting with args: {:?}", cli);

    let config = Config::from_cli(cli);

    match runner::run(&config) {
        Ok(report) => {
            tracing::info!(
                checked = report.checked,
                resolved = report.resolved,
                unseen = report.unseen,
                updated = report.updated,
                unchanged = report.unchanged,
                "Run complete"
            );
            if report.succeeded() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            tracing::error!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

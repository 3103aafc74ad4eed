//! LogKit: level and source-IP statistics for line-delimited JSON logs.
//!
//! Entry point: parses arguments, initialises structured logging, and runs
//! the query. Failures are printed to stderr and mapped to a non-zero exit.

mod app;
mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::Layer as _;

use cli::Cli;
use logkit::util::constants;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    tracing::debug!("{} v{} starting", constants::APP_NAME, constants::APP_VERSION);

    match app::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "Run failed");
            eprintln!("error: {e}");
            ExitCode::from(constants::EXIT_FAILURE)
        }
    }
}

/// Initialise the tracing subscriber.
///
/// Diagnostics go to stderr, filtered by the `RUST_LOG` env var (default:
/// [`constants::DEFAULT_LOG_FILTER`]). stdout is left for results.
fn init_logging() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(constants::DEFAULT_LOG_FILTER));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(env_filter))
        .init();
}

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use droid_receipts::constants::LOG_FILTER_ENV;
use droid_receipts::output::SystemViewer;
use droid_receipts::run_hook;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the saved path
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    // Hosts usually capture stdout; only colour the saved path for a terminal
    colored::control::set_override(io::stdout().is_terminal());

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("Failed to start runtime: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let home = home::home_dir();
    runtime.block_on(run_hook(io::stdin().lock(), home.as_deref(), &SystemViewer))
}

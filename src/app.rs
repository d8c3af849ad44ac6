use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use tracing::{debug, error, info};

use crate::config::ReceiptConfig;
use crate::error::Result;
use crate::output::{Viewer, write_receipt};
use crate::render::render_receipt;
use crate::resolver::{Resolution, SkipReason, resolve_session};
use crate::types::HookInput;

/// What a single hook invocation ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Generated(PathBuf),
    Skipped(SkipReason),
}

/// Resolve, render and write the receipt for one session
pub async fn generate_receipt(
    input: &HookInput,
    config: &ReceiptConfig,
    home: Option<&Path>,
    viewer: &dyn Viewer,
) -> Result<Outcome> {
    let now = || Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    let session = match resolve_session(input, home, now).await? {
        Resolution::Resolved(session) => session,
        Resolution::Skipped(reason) => return Ok(Outcome::Skipped(reason)),
    };

    debug!(session = %session.session_id, model = %session.model, "rendering receipt");
    let receipt = render_receipt(&session, config.price_per_million);
    let path = write_receipt(&config.receipts_dir, &session.session_id, &receipt).await?;

    if config.open_after_write {
        // Viewing is a convenience; its failure does not affect the outcome
        if let Err(err) = viewer.open(&path) {
            debug!(error = %err, path = %path.display(), "could not open receipt");
        }
    }

    Ok(Outcome::Generated(path))
}

/// Run the hook for one stdin payload and report the result.
///
/// Every outcome maps to a successful exit so a failed receipt never
/// interrupts the session that triggered it.
pub async fn run_hook(
    stdin: impl std::io::Read,
    home: Option<&Path>,
    viewer: &dyn Viewer,
) -> ExitCode {
    match read_and_generate(stdin, home, viewer).await {
        Ok(Outcome::Generated(path)) => {
            info!(path = %path.display(), "receipt generated");
            println!("{}", saved_line(&path));
        }
        Ok(Outcome::Skipped(reason)) => {
            info!("{}", reason);
        }
        Err(err) => {
            error!("Error generating receipt: {}", error_chain(&err));
        }
    }

    ExitCode::SUCCESS
}

async fn read_and_generate(
    stdin: impl std::io::Read,
    home: Option<&Path>,
    viewer: &dyn Viewer,
) -> Result<Outcome> {
    let input: HookInput = serde_json::from_reader(stdin)?;
    let config = ReceiptConfig::from_env(home)?;
    generate_receipt(&input, &config, home, viewer).await
}

// Colour follows `colored`'s override, set by the binary from stdout's TTY state
fn saved_line(path: &Path) -> String {
    format!("Receipt saved to {}", path.display().to_string().green())
}

// Render an error with its sources, outermost first
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

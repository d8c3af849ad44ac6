use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::{DEFAULT_SESSION_TITLE, LOCATION_MAX_CHARS, TITLE_MAX_CHARS, UNKNOWN_MODEL};
use crate::error::Result;
use crate::formatting::truncate_chars;
use crate::types::{HookInput, SessionData, TokenUsage};
use crate::utils::{
    expand_home, load_settings, load_transcript_meta, location_from_cwd, settings_path_for,
};

/// Why a session produced no receipt
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    SettingsNotFound { path: PathBuf },
    NoTokenUsage,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::SettingsNotFound { path } => {
                write!(f, "No session settings found at {}", path.display())
            }
            SkipReason::NoTokenUsage => write!(f, "No token usage data available"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(SessionData),
    Skipped(SkipReason),
}

/// Resolve everything the receipt needs from the hook payload.
///
/// Usage numbers come from the settings file next to the transcript, title
/// and end time from the transcript itself. Either file may be missing or
/// partly malformed. `now` supplies the end time when the transcript has no
/// timestamp.
pub async fn resolve_session(
    input: &HookInput,
    home: Option<&Path>,
    now: impl FnOnce() -> String,
) -> Result<Resolution> {
    let location = truncate_chars(&location_from_cwd(&input.cwd), LOCATION_MAX_CHARS);

    let transcript_path = expand_home(&input.transcript_path, home);
    let settings_path = settings_path_for(&transcript_path);
    debug!(
        transcript = %transcript_path.display(),
        settings = %settings_path.display(),
        "resolving session files"
    );

    let Some(settings) = load_settings(&settings_path).await? else {
        return Ok(Resolution::Skipped(SkipReason::SettingsNotFound {
            path: settings_path,
        }));
    };

    let tokens = match settings.token_usage.as_ref() {
        Some(record) if !record.is_empty() => TokenUsage::from(record),
        _ => return Ok(Resolution::Skipped(SkipReason::NoTokenUsage)),
    };

    let meta = load_transcript_meta(&transcript_path).await;
    let title = meta.title.unwrap_or_else(|| DEFAULT_SESSION_TITLE.to_string());

    Ok(Resolution::Resolved(SessionData {
        session_id: input.session_id.clone(),
        title: truncate_chars(&title, TITLE_MAX_CHARS),
        location,
        model: settings.model.unwrap_or_else(|| UNKNOWN_MODEL.to_string()),
        tokens,
        end_time: meta.end_time.unwrap_or_else(now),
        active_time_ms: settings.assistant_active_time_ms.unwrap_or(0),
    }))
}

use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_LOCATION, RECEIPTS_DIR_COMPONENTS, SETTINGS_SUFFIX, TRANSCRIPT_SUFFIX,
};

// Expand a leading `~` to the given home directory
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home.to_path_buf();
    }

    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Settings file that sits next to a transcript.
///
/// `session.jsonl` becomes `session.settings.json`; a path without the
/// transcript suffix gets the settings suffix appended.
pub fn settings_path_for(transcript_path: &Path) -> PathBuf {
    let raw = transcript_path.to_string_lossy();
    let stem = raw.strip_suffix(TRANSCRIPT_SUFFIX).unwrap_or(&raw);
    PathBuf::from(format!("{}{}", stem, SETTINGS_SUFFIX))
}

// Final component of the working directory
pub fn location_from_cwd(cwd: &str) -> String {
    if cwd.is_empty() {
        return DEFAULT_LOCATION.to_string();
    }

    Path::new(cwd)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(cwd)
        .to_string()
}

// Default receipts directory under the user's home
pub fn default_receipts_dir(home: &Path) -> PathBuf {
    RECEIPTS_DIR_COMPONENTS
        .iter()
        .fold(home.to_path_buf(), |path, component| path.join(component))
}

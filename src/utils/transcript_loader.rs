use crate::types::TranscriptEntry;
use std::path::Path;
use tokio::fs as async_fs;

/// Narrative metadata pulled from a session transcript
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptMeta {
    pub title: Option<String>,
    pub end_time: Option<String>,
}

/// Load title and end time from a transcript file
///
/// A missing or unreadable transcript yields empty metadata.
pub async fn load_transcript_meta(transcript_path: &Path) -> TranscriptMeta {
    // Try to read the file
    let Ok(content) = async_fs::read_to_string(transcript_path).await else {
        return TranscriptMeta::default();
    };

    parse_transcript_meta(&content)
}

/// Extract title and end time from JSONL content
///
/// The title comes from the first record that parses; the end time from the
/// last record that parses and carries a timestamp. Malformed lines are
/// skipped.
pub fn parse_transcript_meta(content: &str) -> TranscriptMeta {
    let title = parsed_entries(content.lines())
        .next()
        .and_then(|entry| entry.title().map(str::to_string));

    // Parse JSONL lines from last to first (most recent timestamp)
    let end_time = parsed_entries(content.lines().rev())
        .find_map(|entry| entry.timestamp().map(str::to_string));

    TranscriptMeta { title, end_time }
}

fn parsed_entries<'a>(
    lines: impl Iterator<Item = &'a str> + 'a,
) -> impl Iterator<Item = TranscriptEntry> + 'a {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| serde_json::from_str::<TranscriptEntry>(line).ok())
}

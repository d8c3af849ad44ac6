use serde::Deserialize;

use super::ids::SessionId;

/// Session-end hook payload, read once from stdin
///
/// Missing fields deserialize to empty values; the resolver decides what an
/// empty value means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub session_id: SessionId,
    #[serde(default)]
    pub transcript_path: String,
    #[serde(default)]
    pub cwd: String,
}

// Session settings file written next to the transcript
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSettings {
    #[serde(default)]
    pub token_usage: Option<TokenUsageRecord>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub assistant_active_time_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsageRecord {
    #[serde(default)]
    pub input_tokens: Option<u64>,
    #[serde(default)]
    pub output_tokens: Option<u64>,
    #[serde(default)]
    pub cache_creation_tokens: Option<u64>,
    #[serde(default)]
    pub cache_read_tokens: Option<u64>,
    // Counters this version does not render still make the record non-empty
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl TokenUsageRecord {
    /// True when the record carries no counters at all (`{}`)
    pub fn is_empty(&self) -> bool {
        self.input_tokens.is_none()
            && self.output_tokens.is_none()
            && self.cache_creation_tokens.is_none()
            && self.cache_read_tokens.is_none()
            && self.other.is_empty()
    }
}

/// One transcript record, any JSON object
///
/// Fields are read on demand so a record with unexpected values elsewhere
/// still yields its title or timestamp.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct TranscriptEntry(serde_json::Map<String, serde_json::Value>);

impl TranscriptEntry {
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(serde_json::Value::as_str)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.0.get("timestamp").and_then(serde_json::Value::as_str)
    }
}

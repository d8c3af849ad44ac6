use super::ids::SessionId;
use super::usage::TokenUsage;

/// Everything the receipt needs to know about one finished session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionData {
    pub session_id: SessionId,
    /// Display title, at most 40 characters
    pub title: String,
    /// Final component of the working directory, at most 30 characters
    pub location: String,
    /// Raw model identifier as written in the settings file
    pub model: String,
    pub tokens: TokenUsage,
    /// ISO-8601 timestamp of the last transcript record
    pub end_time: String,
    pub active_time_ms: u64,
}

use super::input::TokenUsageRecord;

/// Token counters for one session, absent counters read as zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cache_write_tokens: u64,
    pub cache_read_tokens: u64,
}

impl TokenUsage {
    /// Headline total shown on the receipt
    ///
    /// Cache writes and reads are listed and priced on their own lines and
    /// are not part of this total.
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }

    pub fn has_cache_write(&self) -> bool {
        self.cache_write_tokens > 0
    }

    pub fn has_cache_read(&self) -> bool {
        self.cache_read_tokens > 0
    }
}

impl From<&TokenUsageRecord> for TokenUsage {
    fn from(record: &TokenUsageRecord) -> Self {
        TokenUsage {
            input_tokens: record.input_tokens.unwrap_or(0),
            output_tokens: record.output_tokens.unwrap_or(0),
            cache_write_tokens: record.cache_creation_tokens.unwrap_or(0),
            cache_read_tokens: record.cache_read_tokens.unwrap_or(0),
        }
    }
}

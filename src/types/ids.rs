use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::RECEIPT_EXTENSION;

/// NewType wrapper for Session ID
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the receipt rendered for this session
    ///
    /// Path separators are replaced so the receipt always lands directly
    /// inside the receipts directory.
    pub fn receipt_file_name(&self) -> String {
        let stem: String = self
            .0
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        format!("{}.{}", stem, RECEIPT_EXTENSION)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

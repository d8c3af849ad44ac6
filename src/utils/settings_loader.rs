use crate::error::{ReceiptError, Result};
use crate::types::SessionSettings;
use std::path::Path;
use tokio::fs as async_fs;

/// Load the session settings file
///
/// Returns `Ok(None)` when the file does not exist. Any other read failure,
/// or a file that is not valid settings JSON, is an error.
pub async fn load_settings(settings_path: &Path) -> Result<Option<SessionSettings>> {
    let exists = async_fs::try_exists(settings_path)
        .await
        .map_err(|source| ReceiptError::FileRead {
            path: settings_path.to_path_buf(),
            source,
        })?;
    if !exists {
        return Ok(None);
    }

    let content = async_fs::read_to_string(settings_path)
        .await
        .map_err(|source| ReceiptError::FileRead {
            path: settings_path.to_path_buf(),
            source,
        })?;

    let settings = serde_json::from_str(&content).map_err(|source| ReceiptError::JsonParse {
        context: settings_path.display().to_string(),
        source,
    })?;

    Ok(Some(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_settings_is_none() {
        let dir = TempDir::new().unwrap();
        let result = load_settings(&dir.path().join("nope.settings.json")).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_load_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.settings.json");
        std::fs::write(
            &path,
            r#"{"model": "gpt-5.1", "tokenUsage": {"inputTokens": 7}}"#,
        )
        .unwrap();

        let settings = load_settings(&path).await.unwrap().unwrap();
        assert_eq!(settings.model.as_deref(), Some("gpt-5.1"));
        assert_eq!(settings.token_usage.unwrap().input_tokens, Some(7));
        assert_eq!(settings.assistant_active_time_ms, None);
    }

    #[tokio::test]
    async fn test_malformed_settings_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_settings(&path).await;
        assert!(matches!(result, Err(ReceiptError::JsonParse { .. })));
    }
}

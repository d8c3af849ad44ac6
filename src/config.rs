use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_PRICE_PER_MILLION, OPEN_AFTER_WRITE_ENV, PRICE_PER_MILLION_ENV, RECEIPTS_DIR_ENV,
};
use crate::error::{ReceiptError, Result};
use crate::utils::default_receipts_dir;

/// Runtime settings for receipt generation
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptConfig {
    /// Directory receipts are written to
    pub receipts_dir: PathBuf,
    /// USD per one million tokens
    pub price_per_million: f64,
    /// Open the receipt in the system viewer once written
    pub open_after_write: bool,
}

impl ReceiptConfig {
    pub fn new(receipts_dir: impl Into<PathBuf>) -> Self {
        Self {
            receipts_dir: receipts_dir.into(),
            price_per_million: DEFAULT_PRICE_PER_MILLION,
            open_after_write: cfg!(target_os = "macos"),
        }
    }

    /// Build the configuration from environment overrides
    pub fn from_env(home: Option<&Path>) -> Result<Self> {
        Self::from_lookup(home, |key| env::var(key).ok())
    }

    fn from_lookup(home: Option<&Path>, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let receipts_dir = match lookup(RECEIPTS_DIR_ENV).filter(|dir| !dir.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_receipts_dir(home.ok_or(ReceiptError::HomeDirNotFound)?),
        };

        let mut config = Self::new(receipts_dir);

        if let Some(price) = lookup(PRICE_PER_MILLION_ENV)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|p| p.is_finite() && *p >= 0.0)
        {
            config.price_per_million = price;
        }

        if let Some(flag) = lookup(OPEN_AFTER_WRITE_ENV) {
            config.open_after_write = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ReceiptConfig::from_lookup(Some(Path::new("/home/dev")), lookup_from(&[]))
            .unwrap();
        assert_eq!(config.receipts_dir, PathBuf::from("/home/dev/.factory/receipts"));
        assert_eq!(config.price_per_million, 1.0);
        assert_eq!(config.open_after_write, cfg!(target_os = "macos"));
    }

    #[test]
    fn test_overrides() {
        let config = ReceiptConfig::from_lookup(
            None,
            lookup_from(&[
                ("DROID_RECEIPTS_DIR", "/tmp/receipts"),
                ("DROID_RECEIPTS_PRICE_PER_MILLION", "2.5"),
                ("DROID_RECEIPTS_OPEN", "false"),
            ]),
        )
        .unwrap();
        assert_eq!(config.receipts_dir, PathBuf::from("/tmp/receipts"));
        assert_eq!(config.price_per_million, 2.5);
        assert!(!config.open_after_write);
    }

    #[test]
    fn test_invalid_price_keeps_default() {
        for price in ["abc", "-1", "NaN", ""] {
            let config = ReceiptConfig::from_lookup(
                Some(Path::new("/home/dev")),
                lookup_from(&[("DROID_RECEIPTS_PRICE_PER_MILLION", price)]),
            )
            .unwrap();
            assert_eq!(config.price_per_million, 1.0);
        }
    }

    #[test]
    fn test_missing_home_is_error() {
        let result = ReceiptConfig::from_lookup(None, lookup_from(&[]));
        assert!(matches!(result, Err(ReceiptError::HomeDirNotFound)));
    }
}

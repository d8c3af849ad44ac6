/// Price in USD charged per one million tokens
pub const DEFAULT_PRICE_PER_MILLION: f64 = 1.0;

/// Title shown when the transcript carries none
pub const DEFAULT_SESSION_TITLE: &str = "Droid Session";

/// Location shown when the hook reports no working directory
pub const DEFAULT_LOCATION: &str = "The Cloud";

/// Model identifier used when the settings file names no model
pub const UNKNOWN_MODEL: &str = "unknown";

// Display limits, counted in characters
pub const TITLE_MAX_CHARS: usize = 40;
pub const LOCATION_MAX_CHARS: usize = 30;

// Transcript and settings files live side by side and differ only by suffix
pub const TRANSCRIPT_SUFFIX: &str = ".jsonl";
pub const SETTINGS_SUFFIX: &str = ".settings.json";

pub const RECEIPT_EXTENSION: &str = "svg";

/// Receipts directory, relative to the user's home
pub const RECEIPTS_DIR_COMPONENTS: [&str; 2] = [".factory", "receipts"];

// Environment overrides
pub const RECEIPTS_DIR_ENV: &str = "DROID_RECEIPTS_DIR";
pub const PRICE_PER_MILLION_ENV: &str = "DROID_RECEIPTS_PRICE_PER_MILLION";
pub const OPEN_AFTER_WRITE_ENV: &str = "DROID_RECEIPTS_OPEN";
pub const LOG_FILTER_ENV: &str = "DROID_RECEIPTS_LOG";

pub mod paths;
pub mod settings_loader;
pub mod transcript_loader;

pub use paths::{default_receipts_dir, expand_home, location_from_cwd, settings_path_for};
pub use settings_loader::load_settings;
pub use transcript_loader::{TranscriptMeta, load_transcript_meta, parse_transcript_meta};

pub mod cost;
pub mod ids;
pub mod input;
pub mod session;
pub mod usage;

pub use cost::Cost;
pub use ids::SessionId;
pub use input::{HookInput, SessionSettings, TokenUsageRecord, TranscriptEntry};
pub use session::SessionData;
pub use usage::TokenUsage;

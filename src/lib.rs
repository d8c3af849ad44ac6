// Module declarations
pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod models;
pub mod output;
pub mod render;
pub mod resolver;
pub mod types;
pub mod utils;

pub use app::{Outcome, generate_receipt, run_hook};
pub use config::ReceiptConfig;
pub use error::{ReceiptError, Result};
pub use render::{RenderedReceipt, render_receipt};
pub use resolver::{Resolution, SkipReason, resolve_session};
pub use types::{Cost, HookInput, SessionData, SessionId, TokenUsage};

//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_session, load_config, config_path)
//! - `chat` - Conversational logging loop and one-shot parse
//! - `categories` - Custom category management
//! - `ledger` - Summary, log and clear

pub mod categories;
pub mod chat;
pub mod core;
pub mod ledger;

// Re-export command functions for main.rs
pub use categories::*;
pub use chat::*;
pub use self::core::*;
pub use ledger::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

//! Resibo Core Library
//!
//! Deterministic interpretation of free-form expense utterances written in
//! English, Tagalog, Bisaya or a mix:
//! - Language detection from marker words
//! - Amount extraction under several notations (₱50, 50 pesos, 50)
//! - Item extraction by stripping amounts and filler words
//! - Keyword categorization with custom categories ahead of built-ins
//! - Localized responses
//! - Session-scoped confirm/cancel workflow in front of the ledger
//! - Spending aggregates and TOML configuration

pub mod amount;
pub mod config;
pub mod error;
pub mod interpret;
pub mod item;
pub mod language;
pub mod ledger;
pub mod lexicon;
pub mod messages;
pub mod session;
pub mod storage;
pub mod summary;

pub use amount::{extract_amount, find_amount, AmountMatch, AmountNotation};
pub use config::{default_config_path, ResiboConfig};
pub use error::{Error, Result};
pub use interpret::{interpret, Interpretation, ParsedExpense};
pub use item::extract_item;
pub use language::{detect_language, LanguageVariant};
pub use ledger::{Expense, Ledger, MemoryLedger};
pub use lexicon::{
    BuiltinCategory, CategoryMatch, CategorySource, CustomCategory, KeywordMatch, Lexicon,
    BUILTIN_CATEGORIES, CATCH_ALL,
};
pub use messages::{format_peso, localize, localize_key, MessageKey};
pub use session::{
    ChatMessage, ChatRole, Confirmation, PendingExpense, Session, WorkflowState,
};
pub use summary::{summarize, CategoryTotal, SpendingSummary};

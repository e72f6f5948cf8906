//! Session context and confirmation workflow
//!
//! A [`Session`] owns everything one user's conversation needs: the lexicon,
//! the single pending-expense slot, the ledger and the chat transcript.
//! Hosts serving several users create one session per user.
//!
//! ```text
//!   Idle ──interpret(Ready)──────────▶ AwaitingConfirmation
//!   Idle ──interpret(Missing*)───────▶ Idle
//!   AwaitingConfirmation ──interpret(Ready)──▶ AwaitingConfirmation (replaces pending)
//!   AwaitingConfirmation ──override_category─▶ AwaitingConfirmation
//!   AwaitingConfirmation ──confirm───▶ Idle (ledger +1)
//!   AwaitingConfirmation ──cancel────▶ Idle
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::interpret::{interpret, Interpretation, ParsedExpense};
use crate::language::LanguageVariant;
use crate::ledger::{Expense, Ledger, MemoryLedger};
use crate::lexicon::Lexicon;
use crate::messages::{format_peso, localize, MessageKey};

/// The parsed-but-unconfirmed expense held by a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingExpense {
    pub language: LanguageVariant,
    pub amount: f64,
    pub item: String,
    pub category: String,
}

impl From<ParsedExpense> for PendingExpense {
    fn from(parsed: ParsedExpense) -> Self {
        Self {
            language: parsed.language,
            amount: parsed.amount,
            item: parsed.item,
            category: parsed.category,
        }
    }
}

impl PendingExpense {
    /// Summary block shown while waiting for confirmation
    pub fn summary(&self) -> String {
        format!(
            "Expense Summary:\n  Amount:   {}\n  Item:     {}\n  Category: {}",
            format_peso(self.amount),
            self.item,
            self.category
        )
    }

    /// Full assistant reply: acknowledgment, summary, then the confirm question
    pub fn prompt(&self, acknowledgment: &str) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            acknowledgment,
            self.summary(),
            localize(self.language, MessageKey::Confirm)
        )
    }

    fn commit(&self, timestamp: DateTime<Utc>) -> Expense {
        Expense {
            amount: self.amount,
            item: self.item.clone(),
            category: self.category.clone(),
            timestamp,
        }
    }
}

/// Where the confirmation workflow currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    AwaitingConfirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One line of the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Result of a successful confirm
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub expense: Expense,
    /// Ledger total after the append
    pub running_total: f64,
    pub message: String,
}

/// Session-scoped state: lexicon, pending slot, ledger and transcript
#[derive(Debug)]
pub struct Session<L: Ledger = MemoryLedger> {
    lexicon: Lexicon,
    pending: Option<PendingExpense>,
    ledger: L,
    transcript: Vec<ChatMessage>,
}

impl Session<MemoryLedger> {
    /// Session with built-in categories only and an in-memory ledger
    pub fn in_memory() -> Self {
        Self::new(Lexicon::new(), MemoryLedger::new())
    }
}

impl<L: Ledger> Session<L> {
    pub fn new(lexicon: Lexicon, ledger: L) -> Self {
        Self {
            lexicon,
            pending: None,
            ledger,
            transcript: Vec::new(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn pending(&self) -> Option<&PendingExpense> {
        self.pending.as_ref()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn state(&self) -> WorkflowState {
        if self.pending.is_some() {
            WorkflowState::AwaitingConfirmation
        } else {
            WorkflowState::Idle
        }
    }

    /// Interpret an utterance
    ///
    /// A ready result replaces whatever was pending (last write wins). A
    /// clarification result leaves the pending slot untouched.
    pub fn interpret(&mut self, text: &str) -> Interpretation {
        self.say(ChatRole::User, text);

        let result = interpret(&self.lexicon, text);
        match &result {
            Interpretation::Ready {
                expense, message, ..
            } => {
                let pending = PendingExpense::from(expense.clone());
                if self.pending.is_some() {
                    debug!("Replacing pending expense with '{}'", pending.item);
                }
                let reply = pending.prompt(message);
                self.pending = Some(pending);
                self.say(ChatRole::Assistant, &reply);
            }
            Interpretation::MissingAmount { message, .. }
            | Interpretation::MissingItem { message, .. } => {
                self.say(ChatRole::Assistant, message);
            }
        }

        result
    }

    /// Change the pending expense's category
    ///
    /// Rejected without touching the pending expense when nothing is pending
    /// or the name is not a built-in or custom category.
    pub fn override_category(&mut self, category: &str) -> Result<()> {
        if !self.lexicon.is_known_category(category) {
            warn!("Rejected category override to unknown '{}'", category);
            return Err(Error::UnknownCategory(category.to_string()));
        }

        let pending = self.pending.as_mut().ok_or(Error::NoPendingExpense)?;
        debug!(
            "Category override for '{}': {} -> {}",
            pending.item, pending.category, category
        );
        pending.category = category.to_string();
        Ok(())
    }

    /// Commit the pending expense to the ledger
    ///
    /// If the ledger append fails the expense stays pending.
    pub fn confirm(&mut self) -> Result<Confirmation> {
        let pending = self.pending.as_ref().ok_or(Error::NoPendingExpense)?;
        let expense = pending.commit(Utc::now());
        let language = pending.language;

        self.ledger.append(expense.clone())?;
        self.pending = None;

        let running_total = self.ledger.total();
        info!(
            "Saved {} for '{}' ({}), running total {}",
            expense.amount, expense.item, expense.category, running_total
        );

        let message = format!(
            "{} Running total: {}",
            localize(language, MessageKey::Saved),
            format_peso(running_total)
        );
        self.say(ChatRole::Assistant, &message);

        Ok(Confirmation {
            expense,
            running_total,
            message,
        })
    }

    /// Discard the pending expense
    pub fn cancel(&mut self) -> Result<String> {
        let pending = self.pending.take().ok_or(Error::NoPendingExpense)?;
        debug!("Cancelled pending expense '{}'", pending.item);

        let message = localize(pending.language, MessageKey::Cancelled).to_string();
        self.say(ChatRole::Assistant, &message);
        Ok(message)
    }

    /// Empty the ledger and drop any pending expense
    pub fn clear(&mut self) -> Result<()> {
        self.ledger.clear()?;
        self.pending = None;
        info!("Cleared all expenses");
        Ok(())
    }

    pub fn list_categories(&self) -> Vec<String> {
        self.lexicon.list_categories()
    }

    pub fn add_custom_category<S: AsRef<str>>(&mut self, name: &str, keywords: &[S]) -> Result<()> {
        self.lexicon.add_custom_category(name, keywords)
    }

    pub fn remove_custom_category(&mut self, name: &str) -> bool {
        self.lexicon.remove_custom_category(name)
    }

    fn say(&mut self, role: ChatRole, content: &str) {
        self.transcript.push(ChatMessage {
            role,
            content: content.to_string(),
        });
    }
}

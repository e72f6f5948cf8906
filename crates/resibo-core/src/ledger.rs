//! Ledger seam
//!
//! The committed expense history is owned by whoever hosts the session.
//! The core appends through [`Ledger::append`] on confirmation and reads the
//! records back for running totals and summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A committed expense. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: f64,
    pub item: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only expense history
pub trait Ledger {
    /// Append one committed expense
    fn append(&mut self, expense: Expense) -> Result<()>;

    /// All expenses in commit order
    fn expenses(&self) -> &[Expense];

    /// Drop every expense
    fn clear(&mut self) -> Result<()>;

    /// Sum of all amounts
    fn total(&self) -> f64 {
        self.expenses().iter().map(|e| e.amount).sum()
    }

    fn len(&self) -> usize {
        self.expenses().len()
    }

    fn is_empty(&self) -> bool {
        self.expenses().is_empty()
    }
}

/// In-process ledger
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    expenses: Vec<Expense>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }
}

impl Ledger for MemoryLedger {
    fn append(&mut self, expense: Expense) -> Result<()> {
        self.expenses.push(expense);
        Ok(())
    }

    fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    fn clear(&mut self) -> Result<()> {
        self.expenses.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(amount: f64, item: &str) -> Expense {
        Expense {
            amount,
            item: item.to_string(),
            category: "Food & Dining".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_append_and_total() {
        let mut ledger = MemoryLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), 0.0);

        ledger.append(expense(85.0, "Lunch")).unwrap();
        ledger.append(expense(50.5, "Coffee")).unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total(), 135.5);
        assert_eq!(ledger.expenses()[0].item, "Lunch");
    }

    #[test]
    fn test_clear() {
        let mut ledger = MemoryLedger::from_expenses(vec![expense(10.0, "Candy")]);
        ledger.clear().unwrap();
        assert!(ledger.is_empty());
    }
}

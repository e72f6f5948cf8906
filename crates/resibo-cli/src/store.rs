//! JSON file ledger
//!
//! The whole ledger is one pretty-printed JSON array, rewritten atomically on
//! every change. A missing file is an empty ledger.

use std::fs;
use std::path::{Path, PathBuf};

use resibo_core::storage::write_atomic;
use resibo_core::{Expense, Ledger, Result};
use tracing::debug;

pub struct JsonLedger {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl JsonLedger {
    pub fn open(path: &Path) -> Result<Self> {
        let expenses = if path.exists() {
            let content = fs::read_to_string(path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            Vec::new()
        };
        debug!("Opened ledger {} ({} expenses)", path.display(), expenses.len());

        Ok(Self {
            path: path.to_path_buf(),
            expenses,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<()> {
        let content = serde_json::to_vec_pretty(&self.expenses)?;
        write_atomic(&self.path, &content)
    }
}

impl Ledger for JsonLedger {
    fn append(&mut self, expense: Expense) -> Result<()> {
        self.expenses.push(expense);
        if let Err(e) = self.write() {
            self.expenses.pop();
            return Err(e);
        }
        Ok(())
    }

    fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    fn clear(&mut self) -> Result<()> {
        let previous = std::mem::take(&mut self.expenses);
        if let Err(e) = self.write() {
            self.expenses = previous;
            return Err(e);
        }
        Ok(())
    }
}

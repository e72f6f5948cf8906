//! Ledger command implementations (summary, log, clear)

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use resibo_core::{format_peso, summarize, Expense, Ledger};

use super::truncate;
use crate::store::JsonLedger;

fn open_ledger(path: &Path) -> Result<JsonLedger> {
    JsonLedger::open(path).with_context(|| format!("Failed to open ledger {}", path.display()))
}

/// Write the total and per-category breakdown
pub fn print_summary<W: Write>(expenses: &[Expense], out: &mut W) -> Result<()> {
    if expenses.is_empty() {
        writeln!(out, "   No expenses logged yet.")?;
        return Ok(());
    }

    let summary = summarize(expenses);
    writeln!(out)?;
    writeln!(
        out,
        "📊 Total Expenses: {} ({} entries)",
        format_peso(summary.total),
        summary.count
    )?;
    writeln!(out, "   ─────────────────────────────────────────────────────────────")?;
    for row in &summary.by_category {
        writeln!(
            out,
            "   {:<20} {:>14} ({:.1}%)",
            row.category,
            format_peso(row.amount),
            row.percent
        )?;
    }

    Ok(())
}

pub fn cmd_summary(ledger: &Path) -> Result<()> {
    let ledger = open_ledger(ledger)?;
    let stdout = std::io::stdout();
    print_summary(ledger.expenses(), &mut stdout.lock())
}

pub fn cmd_log(ledger: &Path, limit: usize) -> Result<()> {
    let ledger = open_ledger(ledger)?;

    if ledger.is_empty() {
        println!("No expenses logged yet. Start with: resibo chat");
        return Ok(());
    }

    println!();
    println!("🧾 Expenses (newest first)");
    println!("   ─────────────────────────────────────────────────────────────");
    for expense in ledger.expenses().iter().rev().take(limit) {
        println!(
            "   {}  {:>12}  {:<24} {}",
            expense
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S"),
            format_peso(expense.amount),
            truncate(&expense.item, 24),
            expense.category
        );
    }

    if ledger.len() > limit {
        println!("   ... and {} more", ledger.len() - limit);
    }

    Ok(())
}

pub fn cmd_clear(ledger: &Path) -> Result<()> {
    let mut ledger = open_ledger(ledger)?;
    let count = ledger.len();
    ledger.clear().context("Failed to clear ledger")?;
    println!("🗑️  Cleared {} expenses from {}", count, ledger.path().display());
    Ok(())
}

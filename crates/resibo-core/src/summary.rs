//! Spending aggregates over committed expenses
//!
//! These are the numbers a report or insight generator renders; no text is
//! produced here.

use std::collections::HashMap;

use serde::Serialize;

use crate::ledger::Expense;

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    pub count: usize,
    /// Share of the overall total, 0-100
    pub percent: f64,
}

/// Totals for a set of expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingSummary {
    pub total: f64,
    pub count: usize,
    /// Largest category first; equal amounts ordered by name
    pub by_category: Vec<CategoryTotal>,
}

pub fn summarize(expenses: &[Expense]) -> SpendingSummary {
    let total: f64 = expenses.iter().map(|e| e.amount).sum();

    let mut grouped: HashMap<&str, (f64, usize)> = HashMap::new();
    for expense in expenses {
        let entry = grouped.entry(expense.category.as_str()).or_default();
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let mut by_category: Vec<CategoryTotal> = grouped
        .into_iter()
        .map(|(category, (amount, count))| CategoryTotal {
            category: category.to_string(),
            amount,
            count,
            percent: if total > 0.0 {
                amount / total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    by_category.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });

    SpendingSummary {
        total,
        count: expenses.len(),
        by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn expense(amount: f64, category: &str) -> Expense {
        Expense {
            amount,
            item: "x".to_string(),
            category: category.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.count, 0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn test_grouped_and_sorted() {
        let expenses = vec![
            expense(85.0, "Food & Dining"),
            expense(20.0, "Transport"),
            expense(115.0, "Food & Dining"),
            expense(300.0, "Bills & Utilities"),
        ];
        let summary = summarize(&expenses);

        assert_eq!(summary.total, 520.0);
        assert_eq!(summary.count, 4);

        let names: Vec<_> = summary.by_category.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Bills & Utilities", "Food & Dining", "Transport"]);

        let food = &summary.by_category[1];
        assert_eq!(food.amount, 200.0);
        assert_eq!(food.count, 2);
        assert!((food.percent - 38.4615).abs() < 0.001);
    }

    #[test]
    fn test_ties_ordered_by_name() {
        let summary = summarize(&[expense(50.0, "Transport"), expense(50.0, "Education")]);
        assert_eq!(summary.by_category[0].category, "Education");
        assert_eq!(summary.by_category[1].category, "Transport");
        assert_eq!(summary.by_category[0].percent, 50.0);
    }
}

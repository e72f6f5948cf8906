//! Amount extraction
//!
//! Matchers are tried in a fixed order and the first one that hits anywhere
//! in the text wins. Within a matcher only its first match (by position) is
//! used, so "3 items for 45" yields 3.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which notation an amount was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountNotation {
    /// "₱50", "₱ 50.25"
    CurrencySymbol,
    /// "50 pesos", "50php"
    CurrencyWord,
    /// Any standalone number
    BareNumber,
}

impl AmountNotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrencySymbol => "currency_symbol",
            Self::CurrencyWord => "currency_word",
            Self::BareNumber => "bare_number",
        }
    }
}

// Order is part of the contract: symbol, then currency word, then bare number
static AMOUNT_MATCHERS: Lazy<Vec<(Regex, AmountNotation)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"₱\s*(\d+(?:\.\d+)?)").expect("valid regex"),
            AmountNotation::CurrencySymbol,
        ),
        (
            Regex::new(r"(\d+(?:\.\d+)?)\s*(?:pesos?|php)").expect("valid regex"),
            AmountNotation::CurrencyWord,
        ),
        (
            Regex::new(r"\b(\d+(?:\.\d+)?)\b").expect("valid regex"),
            AmountNotation::BareNumber,
        ),
    ]
});

/// Every numeric span with an optional currency symbol/word, as erased by item extraction
pub(crate) static AMOUNT_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)₱?\d+(?:\.\d+)?\s*(?:pesos?|php)?").expect("valid regex")
});

/// An amount found in an utterance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountMatch {
    pub amount: f64,
    pub notation: AmountNotation,
}

/// Find the amount and the notation that produced it
///
/// A digit run too long to fit a finite f64 counts as no match for that
/// matcher, and the next matcher is tried.
pub fn find_amount(text: &str) -> Option<AmountMatch> {
    let lower = text.to_lowercase();

    for (re, notation) in AMOUNT_MATCHERS.iter() {
        let Some(caps) = re.captures(&lower) else {
            continue;
        };
        let Some(amount) = caps
            .get(1)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .filter(|a| a.is_finite())
        else {
            debug!("Skipping unrepresentable amount via {}", notation.as_str());
            continue;
        };
        debug!("Amount {} found via {}", amount, notation.as_str());
        return Some(AmountMatch {
            amount,
            notation: *notation,
        });
    }

    None
}

/// Extract the monetary amount from free text
pub fn extract_amount(text: &str) -> Option<f64> {
    find_amount(text).map(|m| m.amount)
}

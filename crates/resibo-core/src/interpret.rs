//! Utterance interpreter
//!
//! One deterministic pass per utterance: detect language, find the amount,
//! recover the item, pick a category. Missing data is reported through the
//! result variant, never as an error, and nothing carries over between calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::amount::extract_amount;
use crate::item::extract_item;
use crate::language::{detect_language, LanguageVariant};
use crate::lexicon::{CategorySource, Lexicon};
use crate::messages::{localize, MessageKey};

/// A fully parsed, not yet confirmed expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedExpense {
    pub language: LanguageVariant,
    pub amount: f64,
    pub item: String,
    pub category: String,
}

/// Outcome of interpreting one utterance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Interpretation {
    Ready {
        #[serde(flatten)]
        expense: ParsedExpense,
        source: CategorySource,
        /// Acknowledgment text
        message: String,
    },
    MissingAmount {
        language: LanguageVariant,
        message: String,
    },
    MissingItem {
        language: LanguageVariant,
        amount: f64,
        message: String,
    },
}

impl Interpretation {
    pub fn language(&self) -> LanguageVariant {
        match self {
            Self::Ready { expense, .. } => expense.language,
            Self::MissingAmount { language, .. } | Self::MissingItem { language, .. } => *language,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Ready { message, .. }
            | Self::MissingAmount { message, .. }
            | Self::MissingItem { message, .. } => message,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Ready { .. } => "ready",
            Self::MissingAmount { .. } => "missing_amount",
            Self::MissingItem { .. } => "missing_item",
        }
    }
}

/// Interpret a free-form utterance against the session lexicon
pub fn interpret(lexicon: &Lexicon, text: &str) -> Interpretation {
    let language = detect_language(text);

    let Some(amount) = extract_amount(text) else {
        debug!("No amount in '{}'", text);
        return Interpretation::MissingAmount {
            language,
            message: localize(language, MessageKey::MissingAmount).to_string(),
        };
    };

    let Some(item) = extract_item(text) else {
        debug!("Amount {} but no item in '{}'", amount, text);
        return Interpretation::MissingItem {
            language,
            amount,
            message: localize(language, MessageKey::MissingItem).to_string(),
        };
    };

    let category = lexicon.classify(&item);
    debug!(
        "Interpreted '{}' as {} / '{}' / {} ({:?}, {})",
        text, amount, item, category.category, category.source, language
    );

    Interpretation::Ready {
        expense: ParsedExpense {
            language,
            amount,
            item,
            category: category.category,
        },
        source: category.source,
        message: localize(language, MessageKey::Understood).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(result: Interpretation) -> ParsedExpense {
        match result {
            Interpretation::Ready { expense, .. } => expense,
            other => panic!("expected ready, got {:?}", other),
        }
    }

    #[test]
    fn test_english_lunch() {
        let expense = ready(interpret(&Lexicon::new(), "Lunch 85 pesos"));
        assert_eq!(expense.language, LanguageVariant::English);
        assert_eq!(expense.amount, 85.0);
        assert_eq!(expense.item, "Lunch");
        assert_eq!(expense.category, "Food & Dining");
    }

    #[test]
    fn test_bisaya_fare() {
        let expense = ready(interpret(&Lexicon::new(), "Plete nako 20"));
        assert_eq!(expense.language, LanguageVariant::Bisaya);
        assert_eq!(expense.amount, 20.0);
        assert_eq!(expense.item, "Plete");
        assert_eq!(expense.category, "Transport");
    }

    #[test]
    fn test_tagalog_rice() {
        let expense = ready(interpret(&Lexicon::new(), "Bumili ako ng bigas 200"));
        assert_eq!(expense.language, LanguageVariant::Tagalog);
        assert_eq!(expense.amount, 200.0);
        assert_eq!(expense.item, "bigas");
        assert_eq!(expense.category, "Food & Dining");
    }

    #[test]
    fn test_custom_category_priority() {
        let mut lexicon = Lexicon::new();
        lexicon.add_custom_category("Pets", &["vet", "dog food"]).unwrap();

        let result = interpret(&lexicon, "vet checkup 500");
        match &result {
            Interpretation::Ready { source, .. } => assert_eq!(*source, CategorySource::Custom),
            other => panic!("expected ready, got {:?}", other),
        }
        assert_eq!(ready(result).category, "Pets");
    }

    #[test]
    fn test_missing_amount() {
        let result = interpret(&Lexicon::new(), "bumili ako ng kape");
        assert_eq!(result.status(), "missing_amount");
        assert_eq!(result.language(), LanguageVariant::Tagalog);
        assert_eq!(
            result.message(),
            localize(LanguageVariant::Tagalog, MessageKey::MissingAmount)
        );
    }

    #[test]
    fn test_overflowing_number_is_missing_amount() {
        let text = format!("{} lunch", "9".repeat(400));
        let result = interpret(&Lexicon::new(), &text);
        assert_eq!(result.status(), "missing_amount");
        assert!(!result.is_ready());
    }

    #[test]
    fn test_missing_item() {
        let result = interpret(&Lexicon::new(), "gipalit nako 50");
        match result {
            Interpretation::MissingItem {
                language,
                amount,
                ref message,
            } => {
                assert_eq!(language, LanguageVariant::Bisaya);
                assert_eq!(amount, 50.0);
                assert_eq!(message, localize(LanguageVariant::Bisaya, MessageKey::MissingItem));
            }
            other => panic!("expected missing item, got {:?}", other),
        }
    }

    #[test]
    fn test_ready_carries_acknowledgment() {
        let result = interpret(&Lexicon::new(), "Coffee 50 pesos");
        assert!(result.is_ready());
        assert_eq!(
            result.message(),
            localize(LanguageVariant::English, MessageKey::Understood)
        );
    }

    #[test]
    fn test_unmatched_item_falls_to_catch_all() {
        let expense = ready(interpret(&Lexicon::new(), "random thing 99"));
        assert_eq!(expense.category, crate::lexicon::CATCH_ALL);
    }

    #[test]
    fn test_serialized_status_tag() {
        let json = serde_json::to_value(interpret(&Lexicon::new(), "Lunch 85 pesos")).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["item"], "Lunch");
        assert_eq!(json["category"], "Food & Dining");
        assert_eq!(json["language"], "english");
    }
}

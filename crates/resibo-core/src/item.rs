//! Item extraction
//!
//! The item is whatever is left of the utterance once every amount-looking
//! span and every transaction filler word is removed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::amount::AMOUNT_SPAN;

/// Transaction verbs and function words (English, Tagalog, Bisaya), removed as whole words
pub const STOP_WORDS: &[&str] = &[
    // English
    "bought", "paid", "spent", "for",
    // Tagalog
    "bumili", "binili", "binayad", "nagbayad", "gumastos", "ako", "ng", "sa", "ko", "halagang",
    // Bisaya
    "gipalit", "gibayad", "nako", "kay", "og", "ug",
];

// Standalone "i" only; "i-load" and other "i-" verbs keep their prefix
static PRONOUN_I_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|\s)i(?:\s|$)").expect("valid regex"));

static STOP_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = STOP_WORDS
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("valid regex")
});

/// Recover the purchased item from an utterance
///
/// All numeric spans are stripped, not only the one chosen as the amount.
/// Returns None when nothing meaningful is left.
pub fn extract_item(text: &str) -> Option<String> {
    let without_amounts = AMOUNT_SPAN.replace_all(text, "");
    let without_pronoun = PRONOUN_I_RE.replace_all(&without_amounts, " ");
    let without_fillers = STOP_WORD_RE.replace_all(&without_pronoun, "");

    let cleaned = without_fillers.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english() {
        assert_eq!(extract_item("Lunch 85 pesos").as_deref(), Some("Lunch"));
        assert_eq!(
            extract_item("I bought lunch for 85 pesos").as_deref(),
            Some("lunch")
        );
        assert_eq!(extract_item("Spent ₱120 for JEEP").as_deref(), Some("JEEP"));
    }

    #[test]
    fn test_tagalog() {
        assert_eq!(
            extract_item("Bumili ako ng bigas 200").as_deref(),
            Some("bigas")
        );
        assert_eq!(
            extract_item("binili ko sa sari-sari store 30").as_deref(),
            Some("sari-sari store")
        );
    }

    #[test]
    fn test_bisaya() {
        assert_eq!(extract_item("Plete nako 20").as_deref(), Some("Plete"));
        assert_eq!(
            extract_item("gipalit nako og kape 45").as_deref(),
            Some("kape")
        );
    }

    #[test]
    fn test_only_fillers_and_numbers() {
        assert_eq!(extract_item("paid 500"), None);
        assert_eq!(extract_item("gipalit nako og 50"), None);
        assert_eq!(extract_item("  ₱20  30 php "), None);
        assert_eq!(extract_item(""), None);
    }

    #[test]
    fn test_stop_words_are_whole_words() {
        // "ng" inside "ngipin" and "sa" inside "sapatos" survive
        assert_eq!(extract_item("ngipin 500").as_deref(), Some("ngipin"));
        assert_eq!(extract_item("sapatos 900").as_deref(), Some("sapatos"));
    }

    #[test]
    fn test_hyphenated_i_prefix_survives() {
        assert_eq!(
            extract_item("Globe i-load 100").as_deref(),
            Some("Globe i-load")
        );
        assert_eq!(
            extract_item("i-print ko 15").as_deref(),
            Some("i-print")
        );
        // The English pronoun is still dropped
        assert_eq!(extract_item("I paid 40 for jeep").as_deref(), Some("jeep"));
        assert_eq!(extract_item("taxi i took 150").as_deref(), Some("taxi took"));
    }

    #[test]
    fn test_every_numeric_span_is_stripped() {
        assert_eq!(
            extract_item("2 burgers 120 pesos").as_deref(),
            Some("burgers")
        );
        // Digits glued to a word are stripped too
        assert_eq!(
            extract_item("ps5 controller 2500").as_deref(),
            Some("ps controller")
        );
    }
}

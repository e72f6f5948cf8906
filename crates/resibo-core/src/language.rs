//! Language detection from marker words
//!
//! Markers are tested with plain substring containment on the lower-cased
//! utterance, so a marker hidden inside an unrelated word still counts.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tagalog markers, tested in order before any Bisaya marker
const TAGALOG_MARKERS: &[&str] = &[
    "bumili", "binili", "binayad", "bayad", "gastos", "gumastos", "nagbayad",
];

/// Bisaya markers
const BISAYA_MARKERS: &[&str] = &["plete", "palit", "gipalit", "gibayad", "bayad", "gasto"];

/// Language variant of an utterance, used only to pick response text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageVariant {
    #[default]
    English,
    Tagalog,
    Bisaya,
}

impl LanguageVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Tagalog => "tagalog",
            Self::Bisaya => "bisaya",
        }
    }

    pub fn all() -> &'static [LanguageVariant] {
        &[Self::English, Self::Tagalog, Self::Bisaya]
    }
}

impl std::fmt::Display for LanguageVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detect the language variant of an utterance
///
/// Tagalog markers win over Bisaya markers; anything else is English.
pub fn detect_language(text: &str) -> LanguageVariant {
    let lower = text.to_lowercase();

    if let Some(marker) = TAGALOG_MARKERS.iter().find(|m| lower.contains(*m)) {
        debug!("Tagalog marker '{}' found", marker);
        return LanguageVariant::Tagalog;
    }

    if let Some(marker) = BISAYA_MARKERS.iter().find(|m| lower.contains(*m)) {
        debug!("Bisaya marker '{}' found", marker);
        return LanguageVariant::Bisaya;
    }

    LanguageVariant::English
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_english_by_default() {
        assert_eq!(detect_language("Lunch 85 pesos"), LanguageVariant::English);
        assert_eq!(detect_language(""), LanguageVariant::English);
    }

    #[test]
    fn test_detect_tagalog() {
        assert_eq!(
            detect_language("Bumili ako ng bigas 200"),
            LanguageVariant::Tagalog
        );
        assert_eq!(detect_language("NAGBAYAD ng kuryente"), LanguageVariant::Tagalog);
    }

    #[test]
    fn test_detect_bisaya() {
        assert_eq!(detect_language("Plete nako 20"), LanguageVariant::Bisaya);
        assert_eq!(detect_language("gipalit nako og kape"), LanguageVariant::Bisaya);
    }

    #[test]
    fn test_shared_marker_resolves_to_tagalog() {
        // "bayad" is in both lists; Tagalog is tested first
        assert_eq!(detect_language("bayad sa tubig 300"), LanguageVariant::Tagalog);
    }

    #[test]
    fn test_marker_inside_unrelated_word_still_matches() {
        // "gasto" hides inside "gastos", which is itself Tagalog
        assert_eq!(detect_language("gastos 50"), LanguageVariant::Tagalog);
        // "palit" hides inside "kapalit"
        assert_eq!(detect_language("kapalit 50"), LanguageVariant::Bisaya);
    }
}

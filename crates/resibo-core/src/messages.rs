//! Localized response text
//!
//! A fixed table of message keys times language variants. Unknown keys
//! resolve to an empty string instead of an error.

use crate::language::LanguageVariant;

/// Response templates the assistant can say
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Understood,
    MissingAmount,
    MissingItem,
    Confirm,
    Saved,
    Cancelled,
}

impl MessageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Understood => "understood",
            Self::MissingAmount => "missing_amount",
            Self::MissingItem => "missing_item",
            Self::Confirm => "confirm",
            Self::Saved => "saved",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn all() -> &'static [MessageKey] {
        &[
            Self::Understood,
            Self::MissingAmount,
            Self::MissingItem,
            Self::Confirm,
            Self::Saved,
            Self::Cancelled,
        ]
    }
}

impl std::str::FromStr for MessageKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "understood" => Ok(Self::Understood),
            "missing_amount" => Ok(Self::MissingAmount),
            "missing_item" => Ok(Self::MissingItem),
            "confirm" => Ok(Self::Confirm),
            "saved" => Ok(Self::Saved),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Unknown message key: {}", s)),
        }
    }
}

/// Render a message in the given language
pub fn localize(language: LanguageVariant, key: MessageKey) -> &'static str {
    use LanguageVariant::*;
    use MessageKey::*;

    match (language, key) {
        (English, Understood) => "Got it! Let me process that expense...",
        (English, MissingAmount) => "I couldn't find the amount. How much did you spend?",
        (English, MissingItem) => "What did you buy or pay for?",
        (English, Confirm) => "Should I save this to your Daily Log?",
        (English, Saved) => "✅ Expense saved!",
        (English, Cancelled) => "Okay, expense not saved.",

        (Tagalog, Understood) => "Naintindihan ko! Ipoproseso ko ang gastos mo...",
        (Tagalog, MissingAmount) => "Hindi ko makita ang halaga. Magkano ang ginastos mo?",
        (Tagalog, MissingItem) => "Ano ang binili o binayaran mo?",
        (Tagalog, Confirm) => "I-save ko ba ito sa iyong Daily Log?",
        (Tagalog, Saved) => "✅ Na-save na ang gastos!",
        (Tagalog, Cancelled) => "Sige, hindi na-save.",

        (Bisaya, Understood) => "Nakasabot ko! Iproseso nako ni...",
        (Bisaya, MissingAmount) => "Wala koy makita nga kantidad. Pila man ang imong gigasto?",
        (Bisaya, MissingItem) => "Unsa man ang imong gipalit o gibayaran?",
        (Bisaya, Confirm) => "I-save ba nako ni sa imong Daily Log?",
        (Bisaya, Saved) => "✅ Na-save na!",
        (Bisaya, Cancelled) => "Sige, wala na-save.",
    }
}

/// Render a message by its string key; unknown keys give ""
pub fn localize_key(language: LanguageVariant, key: &str) -> &'static str {
    key.parse::<MessageKey>()
        .map(|k| localize(language, k))
        .unwrap_or("")
}

/// Format an amount as pesos with thousands separators, e.g. "₱1,234.50"
pub fn format_peso(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}₱{}.{}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_is_translated() {
        for lang in LanguageVariant::all() {
            for key in MessageKey::all() {
                assert!(!localize(*lang, *key).is_empty(), "{} / {}", lang, key.as_str());
            }
        }
    }

    #[test]
    fn test_localize_by_language() {
        assert_eq!(
            localize(LanguageVariant::English, MessageKey::MissingItem),
            "What did you buy or pay for?"
        );
        assert_eq!(
            localize(LanguageVariant::Tagalog, MessageKey::Cancelled),
            "Sige, hindi na-save."
        );
        assert_eq!(
            localize(LanguageVariant::Bisaya, MessageKey::Saved),
            "✅ Na-save na!"
        );
    }

    #[test]
    fn test_unknown_key_is_empty() {
        assert_eq!(localize_key(LanguageVariant::English, "nope"), "");
        assert_eq!(
            localize_key(LanguageVariant::Bisaya, "missing_amount"),
            localize(LanguageVariant::Bisaya, MessageKey::MissingAmount)
        );
    }

    #[test]
    fn test_format_peso() {
        assert_eq!(format_peso(0.0), "₱0.00");
        assert_eq!(format_peso(85.0), "₱85.00");
        assert_eq!(format_peso(999.999), "₱1,000.00");
        assert_eq!(format_peso(1234.5), "₱1,234.50");
        assert_eq!(format_peso(1234567.891), "₱1,234,567.89");
        assert_eq!(format_peso(-42.0), "-₱42.00");
    }
}

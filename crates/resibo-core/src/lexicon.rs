//! Lexicon store and categorizer
//!
//! Built-in categories are a fixed, ordered keyword table ending in the
//! catch-all. Custom categories are user-defined and always consulted first,
//! in the order they were added. A custom category may reuse a built-in name;
//! lookup still tries both keyword lists (custom first), and only the display
//! listing collapses the two namespaces into one set of names.

use std::collections::BTreeSet;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Category assigned when no keyword matches
pub const CATCH_ALL: &str = "Miscellaneous";

/// A built-in category and its keywords, in match order
#[derive(Debug, Clone, Copy)]
pub struct BuiltinCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Built-in categories in priority order. The catch-all is last and has no keywords.
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        name: "Food & Dining",
        keywords: &[
            // General food
            "food", "meal", "lunch", "dinner", "breakfast", "snack", "merienda",
            // Filipino staples
            "rice", "bigas", "ulam", "kaon", "pagkaon", "sud-an",
            // Dining
            "restaurant", "jollibee", "mcdo", "mcdonald", "kfc", "pizza", "burger",
            "coffee", "kape", "starbucks", "cafe", "carinderia", "turo-turo",
            // Groceries
            "grocery", "groceries", "palengke", "market", "supermarket", "sari-sari",
            "vegetables", "gulay", "meat", "karne", "fish", "isda", "fruits", "prutas",
        ],
    },
    BuiltinCategory {
        name: "Transport",
        keywords: &[
            "transport", "fare", "plete", "pamasahe", "jeep", "jeepney", "tricycle", "trike",
            "habal-habal", "motor", "bus", "taxi", "grab", "angkas", "uber", "sakay", "gas",
            "gasolina", "diesel", "fuel", "parking",
        ],
    },
    BuiltinCategory {
        name: "Bills & Utilities",
        keywords: &[
            "bill", "bills", "bayad", "utilities", "electric", "electricity", "kuryente",
            "meralco", "water", "tubig", "maynilad", "internet", "wifi", "pldt", "globe",
            "smart", "phone", "mobile", "postpaid", "plan",
        ],
    },
    BuiltinCategory {
        name: "Shopping",
        keywords: &[
            "shopping", "shop", "clothes", "clothing", "damit", "shirt", "pants", "shoes",
            "sapatos", "sandals", "tsinelas", "bag", "wallet", "watch", "accessories",
            "gadget", "phone", "cellphone", "laptop", "earphones", "charger",
        ],
    },
    BuiltinCategory {
        name: "Health & Wellness",
        keywords: &[
            "health", "medicine", "gamot", "bulong", "tambal", "doctor", "doktor", "hospital",
            "clinic", "checkup", "vitamins", "supplement", "pharmacy", "botika", "mercury",
            "gym", "fitness", "workout", "yoga", "massage", "hilot",
        ],
    },
    BuiltinCategory {
        name: "Personal Care",
        keywords: &[
            "haircut", "gupit", "salon", "barber", "parlor", "shampoo", "soap", "sabon",
            "toothpaste", "deodorant", "cosmetics", "makeup", "skincare", "lotion", "perfume",
            "pabango", "grooming", "beauty", "nails", "spa",
        ],
    },
    BuiltinCategory {
        name: "Entertainment",
        keywords: &[
            "entertainment", "movie", "cinema", "netflix", "spotify", "concert", "gig", "show",
            "theater", "games", "gaming", "ps5", "xbox", "nintendo", "mobile legends", "ml",
            "hobby", "books", "libro", "magazine", "comics",
        ],
    },
    BuiltinCategory {
        name: "Education",
        keywords: &[
            "education", "school", "eskwela", "tuition", "enrollment", "books", "libro",
            "notebook", "pen", "ballpen", "school supplies", "course", "training", "seminar",
            "workshop", "online class", "photocopies", "xerox", "print", "printing",
        ],
    },
    BuiltinCategory {
        name: "Gifts & Others",
        keywords: &[
            "gift", "regalo", "birthday", "kaarawan", "donation", "donasyon", "charity",
            "church", "simbahan", "offering", "abuloy", "contribution",
        ],
    },
    BuiltinCategory {
        name: CATCH_ALL,
        keywords: &[],
    },
];

/// How a category keyword is matched against item text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMatch {
    /// Case-insensitive substring match; a short keyword can hit inside a longer word
    #[default]
    Contains,
    /// Case-insensitive whole-word match
    Word,
}

impl KeywordMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::Word => "word",
        }
    }

    /// Test one keyword against item text. Every category lookup goes through here.
    pub fn matches(&self, text: &str, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return false;
        }

        match self {
            Self::Contains => text.to_lowercase().contains(&keyword.to_lowercase()),
            Self::Word => {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
                match Regex::new(&pattern) {
                    Ok(re) => re.is_match(text),
                    Err(e) => {
                        warn!("Bad keyword pattern '{}': {}", keyword, e);
                        false
                    }
                }
            }
        }
    }
}

impl std::fmt::Display for KeywordMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user-defined category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Where a category assignment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySource {
    /// A custom category keyword matched
    Custom,
    /// A built-in category keyword matched
    Builtin,
    /// Nothing matched
    CatchAll,
}

/// Result of categorizing item text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatch {
    pub category: String,
    pub source: CategorySource,
    /// The keyword that matched (None for the catch-all)
    pub keyword: Option<String>,
}

/// Built-in plus custom category keywords for one session
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    custom: Vec<CustomCategory>,
    matching: KeywordMatch,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matching(matching: KeywordMatch) -> Self {
        Self {
            custom: Vec::new(),
            matching,
        }
    }

    pub fn matching(&self) -> KeywordMatch {
        self.matching
    }

    /// Custom categories in insertion order
    pub fn custom_categories(&self) -> &[CustomCategory] {
        &self.custom
    }

    /// Add (or replace) a custom category
    ///
    /// Keywords are trimmed and blank entries dropped. Fails without touching
    /// the lexicon if the name or the resulting keyword list is empty. Replacing
    /// an existing name keeps its position in the lookup order.
    pub fn add_custom_category<S: AsRef<str>>(&mut self, name: &str, keywords: &[S]) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("category name is empty".to_string()));
        }

        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            return Err(Error::Validation(format!(
                "category '{}' has no keywords",
                name
            )));
        }

        if let Some(existing) = self.custom.iter_mut().find(|c| c.name == name) {
            debug!("Replacing keywords for custom category '{}'", name);
            existing.keywords = keywords;
        } else {
            debug!("Adding custom category '{}'", name);
            self.custom.push(CustomCategory {
                name: name.to_string(),
                keywords,
            });
        }

        Ok(())
    }

    /// Remove a custom category. Returns whether anything was removed.
    pub fn remove_custom_category(&mut self, name: &str) -> bool {
        let before = self.custom.len();
        self.custom.retain(|c| c.name != name.trim());
        before != self.custom.len()
    }

    /// Map item text to a category name
    pub fn resolve_category(&self, item: &str) -> String {
        self.classify(item).category
    }

    /// Map item text to a category, reporting which keyword decided it
    /// Priority: custom categories (insertion order) → built-ins (declared order) → catch-all
    pub fn classify(&self, item: &str) -> CategoryMatch {
        for custom in &self.custom {
            if let Some(keyword) = self.first_hit(item, custom.keywords.iter().map(String::as_str)) {
                debug!("Custom keyword '{}' matched '{}': {}", keyword, item, custom.name);
                return CategoryMatch {
                    category: custom.name.clone(),
                    source: CategorySource::Custom,
                    keyword: Some(keyword.to_string()),
                };
            }
        }

        for builtin in BUILTIN_CATEGORIES.iter().filter(|b| b.name != CATCH_ALL) {
            if let Some(keyword) = self.first_hit(item, builtin.keywords.iter().copied()) {
                debug!("Built-in keyword '{}' matched '{}': {}", keyword, item, builtin.name);
                return CategoryMatch {
                    category: builtin.name.to_string(),
                    source: CategorySource::Builtin,
                    keyword: Some(keyword.to_string()),
                };
            }
        }

        debug!("No keyword matched '{}', using {}", item, CATCH_ALL);
        CategoryMatch {
            category: CATCH_ALL.to_string(),
            source: CategorySource::CatchAll,
            keyword: None,
        }
    }

    fn first_hit<'k>(&self, item: &str, mut keywords: impl Iterator<Item = &'k str>) -> Option<&'k str> {
        keywords.find(|k| self.matching.matches(item, k))
    }

    /// Built-in names in declared order (catch-all last)
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_CATEGORIES.iter().map(|b| b.name)
    }

    /// All category names for display: built-ins unioned with custom names,
    /// deduplicated and sorted
    pub fn list_categories(&self) -> Vec<String> {
        Self::builtin_names()
            .map(str::to_string)
            .chain(self.custom.iter().map(|c| c.name.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Whether a name is a built-in or custom category
    pub fn is_known_category(&self, name: &str) -> bool {
        Self::builtin_names().any(|b| b == name) || self.custom.iter().any(|c| c.name == name)
    }
}

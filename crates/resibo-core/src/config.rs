//! Resibo configuration
//!
//! Config is loaded with a layered resolution:
//! 1. An explicit path, if given and present on disk
//! 2. The per-user override (~/.local/share/resibo/config.toml), when no explicit path was given
//! 3. Embedded defaults (compiled into the binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::lexicon::{CustomCategory, KeywordMatch, Lexicon};
use crate::storage::write_atomic;

/// Embedded default config (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../../config/resibo.toml");

/// Session settings read from TOML
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResiboConfig {
    pub matching: KeywordMatch,
    /// In lookup order
    pub custom_categories: Vec<CustomCategory>,
}

/// Raw config structure for TOML (de)serialization
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawConfig {
    #[serde(default)]
    matching: RawMatching,
    #[serde(default)]
    custom_categories: Vec<CustomCategory>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RawMatching {
    #[serde(default)]
    mode: KeywordMatch,
}

impl ResiboConfig {
    /// Parse config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::InvalidData(format!("Invalid config TOML: {}", e)))?;

        Ok(Self {
            matching: raw.matching.mode,
            custom_categories: raw.custom_categories,
        })
    }

    pub fn to_toml(&self) -> Result<String> {
        let raw = RawConfig {
            matching: RawMatching {
                mode: self.matching,
            },
            custom_categories: self.custom_categories.clone(),
        };
        toml::to_string_pretty(&raw)
            .map_err(|e| Error::InvalidData(format!("Failed to serialize config: {}", e)))
    }

    /// Load configuration
    ///
    /// An explicit path replaces the per-user override location; if that file
    /// does not exist yet the embedded default is used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let source = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path(),
        };

        let content = match source {
            Some(p) if p.exists() => {
                debug!("Loading config from {}", p.display());
                fs::read_to_string(&p)
                    .map_err(|e| Error::InvalidData(format!("Failed to read config: {}", e)))?
            }
            _ => DEFAULT_CONFIG.to_string(),
        };

        Self::from_toml(&content)
    }

    /// Write configuration to disk atomically
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        write_atomic(path, content.as_bytes())?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Build a lexicon, validating every custom category
    pub fn to_lexicon(&self) -> Result<Lexicon> {
        let mut lexicon = Lexicon::with_matching(self.matching);
        for custom in &self.custom_categories {
            lexicon.add_custom_category(&custom.name, custom.keywords.as_slice())?;
        }
        Ok(lexicon)
    }

    /// Snapshot a lexicon back into config form
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        Self {
            matching: lexicon.matching(),
            custom_categories: lexicon.custom_categories().to_vec(),
        }
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("resibo").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_config() {
        let config = ResiboConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.matching, KeywordMatch::Contains);
        assert!(config.custom_categories.is_empty());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = ResiboConfig::from_toml("").unwrap();
        assert_eq!(config, ResiboConfig::default());
    }

    #[test]
    fn test_parse_custom_categories_in_order() {
        let config = ResiboConfig::from_toml(
            r#"
[matching]
mode = "word"

[[custom_categories]]
name = "Pets"
keywords = ["vet", "dog food"]

[[custom_categories]]
name = "Subscriptions"
keywords = ["netflix"]
"#,
        )
        .unwrap();

        assert_eq!(config.matching, KeywordMatch::Word);
        assert_eq!(config.custom_categories.len(), 2);
        assert_eq!(config.custom_categories[0].name, "Pets");
        assert_eq!(config.custom_categories[1].keywords, vec!["netflix"]);

        let lexicon = config.to_lexicon().unwrap();
        assert_eq!(lexicon.resolve_category("netflix"), "Subscriptions");
    }

    #[test]
    fn test_invalid_mode() {
        let result = ResiboConfig::from_toml("[matching]\nmode = \"fuzzy\"\n");
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_empty_keywords_rejected_on_lexicon_build() {
        let config = ResiboConfig::from_toml(
            "[[custom_categories]]\nname = \"Pets\"\nkeywords = []\n",
        )
        .unwrap();
        assert!(matches!(config.to_lexicon(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut lexicon = Lexicon::with_matching(KeywordMatch::Word);
        lexicon.add_custom_category("Pets", &["vet"]).unwrap();
        let config = ResiboConfig::from_lexicon(&lexicon);
        config.save(&path).unwrap();

        let loaded = ResiboConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_explicit_path_uses_defaults_not_user_override() {
        let dir = tempfile::tempdir().unwrap();
        let config = ResiboConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, ResiboConfig::from_toml(DEFAULT_CONFIG).unwrap());
    }
}

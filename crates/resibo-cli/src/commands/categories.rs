//! Category command implementations

use std::path::Path;

use anyhow::{Context, Result};
use resibo_core::{Lexicon, ResiboConfig, CATCH_ALL};

use super::{config_path, load_config, truncate};

pub fn cmd_categories_list(config: Option<&Path>) -> Result<()> {
    let lexicon = load_config(config)?
        .to_lexicon()
        .context("Invalid custom categories in config")?;

    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────────────────────────────────────");

    for name in Lexicon::builtin_names() {
        if name == CATCH_ALL {
            println!("   • {} (catch-all)", name);
        } else {
            println!("   • {}", name);
        }
    }

    if !lexicon.custom_categories().is_empty() {
        println!();
        println!("   Custom (checked first, keyword match: {}):", lexicon.matching());
        for custom in lexicon.custom_categories() {
            println!(
                "   • {}: {}",
                custom.name,
                truncate(&custom.keywords.join(", "), 50)
            );
        }
    }

    Ok(())
}

/// Parse a comma-separated keyword list, dropping blanks
pub fn parse_keywords(keywords: &str) -> Vec<String> {
    keywords
        .split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

pub fn cmd_categories_add(config: Option<&Path>, name: &str, keywords: &str) -> Result<()> {
    let path = config_path(config)?;
    let mut lexicon = load_config(config)?
        .to_lexicon()
        .context("Invalid custom categories in config")?;

    let keywords = parse_keywords(keywords);
    lexicon.add_custom_category(name, keywords.as_slice())?;

    ResiboConfig::from_lexicon(&lexicon)
        .save(&path)
        .with_context(|| format!("Failed to save config {}", path.display()))?;

    println!("✅ Added category: {} ({})", name.trim(), keywords.join(", "));
    Ok(())
}

pub fn cmd_categories_remove(config: Option<&Path>, name: &str) -> Result<()> {
    let path = config_path(config)?;
    let mut lexicon = load_config(config)?
        .to_lexicon()
        .context("Invalid custom categories in config")?;

    if !lexicon.remove_custom_category(name) {
        println!("   No custom category named '{}'", name);
        return Ok(());
    }

    ResiboConfig::from_lexicon(&lexicon)
        .save(&path)
        .with_context(|| format!("Failed to save config {}", path.display()))?;

    println!("🗑️  Removed category: {}", name);
    Ok(())
}

//! Shared utilities for commands
//!
//! - `load_config` - Resolve and read the config file
//! - `config_path` - Where config changes are written
//! - `open_session` - Build a session over the JSON ledger

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use resibo_core::{default_config_path, ResiboConfig, Session};

use crate::store::JsonLedger;

/// Load config from --config, the per-user override, or embedded defaults
pub fn load_config(config: Option<&Path>) -> Result<ResiboConfig> {
    ResiboConfig::load(config).context("Failed to load config")
}

/// Path config changes are saved to
pub fn config_path(config: Option<&Path>) -> Result<PathBuf> {
    match config {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path()
            .ok_or_else(|| anyhow::anyhow!("No data directory found; pass --config")),
    }
}

/// Open a session over the ledger file with the configured lexicon
pub fn open_session(ledger: &Path, config: Option<&Path>) -> Result<Session<JsonLedger>> {
    let lexicon = load_config(config)?
        .to_lexicon()
        .context("Invalid custom categories in config")?;
    let ledger = JsonLedger::open(ledger)
        .with_context(|| format!("Failed to open ledger {}", ledger.display()))?;
    Ok(Session::new(lexicon, ledger))
}

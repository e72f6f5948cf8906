//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Resibo - Log expenses by just typing them
#[derive(Parser)]
#[command(name = "resibo")]
#[command(about = "Multilingual (English, Tagalog, Bisaya) expense logger", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Ledger file (JSON)
    #[arg(long, default_value = "resibo-ledger.json", global = true)]
    pub ledger: PathBuf,

    /// Config file (defaults to ~/.local/share/resibo/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chat to log expenses (type /help inside for commands)
    Chat,

    /// Interpret one utterance without saving anything
    Parse {
        /// The utterance, e.g. "Bumili ako ng bigas 200"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print the interpretation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage custom categories
    Categories {
        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },

    /// Show total and per-category breakdown
    Summary,

    /// List saved expenses, newest first
    Log {
        /// Maximum number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Delete every saved expense
    Clear,
}

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List all categories
    List,

    /// Add (or replace) a custom category
    Add {
        /// Category name
        name: String,

        /// Comma-separated keywords (e.g., "dog food, vet, pet")
        #[arg(short, long)]
        keywords: String,
    },

    /// Remove a custom category
    Remove {
        /// Category name
        name: String,
    },
}

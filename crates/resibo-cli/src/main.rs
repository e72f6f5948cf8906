//! Resibo CLI - Multilingual expense logger
//!
//! Usage:
//!   resibo chat                         Log expenses conversationally
//!   resibo parse "Lunch 85 pesos"       Show how an utterance is interpreted
//!   resibo categories add Pets -k vet   Add a custom category
//!   resibo summary                      Spending by category

mod cli;
mod commands;
mod store;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Chat => commands::cmd_chat(&cli.ledger, config),
        Commands::Parse { text, json } => commands::cmd_parse(config, &text.join(" "), json),
        Commands::Categories { action } => match action {
            None | Some(CategoriesAction::List) => commands::cmd_categories_list(config),
            Some(CategoriesAction::Add { name, keywords }) => {
                commands::cmd_categories_add(config, &name, &keywords)
            }
            Some(CategoriesAction::Remove { name }) => {
                commands::cmd_categories_remove(config, &name)
            }
        },
        Commands::Summary => commands::cmd_summary(&cli.ledger),
        Commands::Log { limit } => commands::cmd_log(&cli.ledger, limit),
        Commands::Clear => commands::cmd_clear(&cli.ledger),
    }
}

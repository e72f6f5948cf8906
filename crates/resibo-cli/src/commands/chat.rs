//! Conversational logging
//!
//! Plain lines are utterances. Slash commands resolve the pending expense
//! or inspect the session.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use resibo_core::{format_peso, interpret, Error, Interpretation, Ledger, Session};

use super::{load_config, open_session, print_summary};

const HELP: &str = "\
Type an expense in English, Tagalog or Bisaya, e.g. 'Bumili ako ng bigas 200'.
  /yes              save the pending expense
  /no               discard the pending expense
  /category <name>  change the pending expense's category
  /categories       list categories
  /total            spending summary
  /clear            delete every saved expense
  /quit             exit";

pub fn cmd_chat(ledger: &Path, config: Option<&Path>) -> Result<()> {
    let mut session = open_session(ledger, config)?;

    println!("💰 Resibo - English • Tagalog • Bisaya");
    println!("   Try: 'Lunch 85 pesos' | 'Bumili ako ng bigas 200' | 'Plete nako 15'");
    println!("   /help for commands");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_chat(&mut session, stdin.lock(), stdout.lock())
}

/// Drive a session from line input until EOF or /quit
pub fn run_chat<L, R, W>(session: &mut Session<L>, input: R, mut out: W) -> Result<()>
where
    L: Ledger,
    R: BufRead,
    W: Write,
{
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();

        if !line.is_empty() && !handle_line(session, line, &mut out)? {
            break;
        }

        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

/// Handle one input line. Returns false when the user asked to quit.
fn handle_line<L: Ledger, W: Write>(session: &mut Session<L>, line: &str, out: &mut W) -> Result<bool> {
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((c, a)) => (c, a.trim()),
        None => (line, ""),
    };

    match command {
        "/quit" | "/exit" => return Ok(false),
        "/help" => writeln!(out, "{}", HELP)?,
        "/yes" | "/y" => match session.confirm() {
            Ok(confirmation) => writeln!(out, "🤖 {}", confirmation.message)?,
            Err(Error::NoPendingExpense) => writeln!(out, "   Nothing to save.")?,
            Err(e) => return Err(e).context("Failed to save expense"),
        },
        "/no" | "/n" => match session.cancel() {
            Ok(message) => writeln!(out, "🤖 {}", message)?,
            Err(_) => writeln!(out, "   Nothing to cancel.")?,
        },
        "/category" => {
            if arg.is_empty() {
                writeln!(out, "   Usage: /category <name>")?;
            } else {
                match session.override_category(arg) {
                    Ok(()) => {
                        if let Some(pending) = session.pending() {
                            writeln!(out, "{}", pending.summary())?;
                        }
                    }
                    Err(Error::UnknownCategory(name)) => {
                        writeln!(out, "   ❌ Unknown category '{}'. Try /categories", name)?;
                    }
                    Err(_) => writeln!(out, "   Nothing pending to change.")?,
                }
            }
        }
        "/categories" => {
            for name in session.list_categories() {
                writeln!(out, "   • {}", name)?;
            }
        }
        "/total" => print_summary(session.ledger().expenses(), out)?,
        "/clear" => {
            session.clear().context("Failed to clear ledger")?;
            writeln!(out, "🗑️  Cleared all expenses.")?;
        }
        _ if command.starts_with('/') => {
            writeln!(out, "   Unknown command '{}'. /help for commands", command)?
        }
        _ => {
            let result = session.interpret(line);
            // The session transcript holds the full reply for this turn
            let reply = session
                .transcript()
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_else(|| result.message().to_string());
            writeln!(out, "🤖 {}", reply)?;
        }
    }

    Ok(true)
}

/// Interpret one utterance without a session or ledger
pub fn cmd_parse(config: Option<&Path>, text: &str, json: bool) -> Result<()> {
    let lexicon = load_config(config)?
        .to_lexicon()
        .context("Invalid custom categories in config")?;
    let result = interpret(&lexicon, text);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!();
    println!("   Status:   {}", result.status());
    println!("   Language: {}", result.language());
    match &result {
        Interpretation::Ready {
            expense, source, ..
        } => {
            println!("   Amount:   {}", format_peso(expense.amount));
            println!("   Item:     {}", expense.item);
            println!("   Category: {} ({:?})", expense.category, source);
        }
        Interpretation::MissingItem { amount, .. } => {
            println!("   Amount:   {}", format_peso(*amount));
        }
        Interpretation::MissingAmount { .. } => {}
    }
    println!("   Reply:    {}", result.message());

    Ok(())
}

//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data directory and build the ledger
//! 3. **Dispatch**: Call the appropriate ledger operation
//! 4. **Output Formatting**: Convert results into terminal output
//! 5. **Error Handling**: Surface errors as messages and exit codes
//!
//! The ledger exposes raw data; everything user-facing (index resolution for
//! `delete`, confirmation prompts, empty-state text, the corrupt-data
//! warning) happens here.

use super::render::{
    format_quantity, print_store_warning, print_success, print_warning, render_drink_list,
    render_total,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use dramlogapp::error::{DramlogError, Result};
use dramlogapp::init::{initialize, DramlogContext};
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::Add {
            name,
            strength,
            volume,
        }) => handle_add(&mut ctx, &name, &strength, &volume),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Total) => handle_total(&ctx),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, &indexes),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
    }
}

fn init_context(cli: &Cli) -> DramlogContext {
    let data_override = cli.data.as_ref().map(PathBuf::from);
    let mut ctx = initialize(data_override);

    if let Some(warning) = ctx.ledger.load_from_store() {
        print_store_warning(&warning);
    }
    ctx
}

fn handle_add(ctx: &mut DramlogContext, name: &str, strength: &str, volume: &str) -> Result<()> {
    let drink = ctx.ledger.add(name, strength, volume)?;
    print_success(&format!(
        "Logged {}: {} g (total {} g)",
        drink.name,
        format_quantity(drink.pure_alcohol),
        format_quantity(ctx.ledger.total_pure_alcohol())
    ));
    Ok(())
}

fn handle_list(ctx: &DramlogContext) -> Result<()> {
    print!("{}", render_drink_list(ctx.ledger.drinks()));
    print!("{}", render_total(ctx.ledger.total_pure_alcohol()));
    Ok(())
}

fn handle_total(ctx: &DramlogContext) -> Result<()> {
    // Bare number for scripts; `list` carries the human-friendly footer.
    println!("{}", format_quantity(ctx.ledger.total_pure_alcohol()));
    Ok(())
}

fn handle_delete(ctx: &mut DramlogContext, indexes: &[String]) -> Result<()> {
    let ids = resolve_indexes(ctx, indexes);

    for id in ids {
        match ctx.ledger.delete(&id) {
            Ok(drink) => print_success(&format!(
                "Deleted {}: {} g",
                drink.name,
                format_quantity(drink.pure_alcohol)
            )),
            // Benign: the same drink named twice in one invocation.
            Err(DramlogError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }
    }

    print!("{}", render_total(ctx.ledger.total_pure_alcohol()));
    Ok(())
}

/// Maps 1-based indexes from the newest-first list view onto record ids.
/// Unknown indexes produce a warning and are skipped; resolution happens
/// up front because each deletion shifts the remaining positions.
fn resolve_indexes(ctx: &DramlogContext, indexes: &[String]) -> Vec<Uuid> {
    let drinks = ctx.ledger.drinks();
    let count = drinks.len();
    let mut ids = Vec::new();

    for raw in indexes {
        match raw.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => ids.push(drinks[count - n].id),
            _ => print_warning(&format!("No drink at index {}", raw)),
        }
    }
    ids
}

fn handle_clear(ctx: &mut DramlogContext, yes: bool) -> Result<()> {
    let count = ctx.ledger.drinks().len();
    if count == 0 {
        println!("Nothing to clear.");
        return Ok(());
    }

    if !yes && !confirm(&format!("Delete all {} drinks? [y/N] ", count)) {
        println!("Aborted.");
        return Ok(());
    }

    ctx.ledger.reset()?;
    print_success("All drinks cleared.");
    Ok(())
}

fn confirm(prompt: &str) -> bool {
    print!("{}", prompt);
    if std::io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

//! # Dramlog CLI
//!
//! Dramlog ships with a small CLI client, but the binary is intentionally
//! thin: the CLI lives in `src/cli/`, while this file only invokes
//! `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! Dramlog is organized as a Cargo workspace with two crates:
//! - `crates/dramlogapp/`: Core library with UI-agnostic tracking logic
//! - `crates/dramlog/`: This CLI tool, depends on the `dramlogapp` library
//!
//! The CLI layer is the only place that knows about terminal I/O, exit codes
//! and output formatting. Everything from the ledger inward takes normal
//! Rust values and returns normal Rust types.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

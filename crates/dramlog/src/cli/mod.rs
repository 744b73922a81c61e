//! # CLI Behavior
//!
//! This is **one possible UI client** for dramlog, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes, and output formatting; it consumes the ledger's sanctioned surface
//! and nothing else.
//!
//! ## Naked Execution (`dramlog`)
//!
//! Running `dramlog` with no arguments defaults to `dramlog list`: the
//! "read" operation is most of the usage and should be the path of least
//! resistance.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the ledger and print output
//! - `render`: Output formatting (columns, colors, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;

//! # Dramlog Architecture
//!
//! Dramlog is a **UI-agnostic intake-tracking library**. This is not a CLI
//! application that happens to have some library code; it's a library that
//! happens to have a CLI client.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI client (e.g. the dramlog CLI crate)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Ledger (ledger.rs)                                         │
//! │  - Authoritative in-memory drink collection                 │
//! │  - add / delete / total with save-rollback discipline       │
//! │  - The complete sanctioned surface into record state        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DrinkStore over an abstract SlotBackend                  │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from the ledger inward takes regular Rust values, returns
//! regular Rust types, never writes to stdout/stderr and never assumes a
//! terminal. Failures are explicit `Result` values; nothing in the core
//! panics on user input or storage trouble.
//!
//! ## Module Overview
//!
//! - [`ledger`]: The session-owning collection, entry point for all
//!   record operations
//! - [`store`]: Single-slot persistence, backends and corrupt-data policy
//! - [`model`]: The [`model::Drink`] record type and its wire format
//! - [`validate`]: The sole gate between raw user input and the model
//! - [`calc`]: Pure-alcohol math
//! - [`config`]: Configuration management
//! - [`init`]: Session wiring for production clients
//! - [`error`]: Error types

pub mod calc;
pub mod config;
pub mod error;
pub mod init;
pub mod ledger;
pub mod model;
pub mod store;
pub mod validate;

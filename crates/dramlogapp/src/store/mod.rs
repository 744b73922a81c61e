//! # Storage Layer
//!
//! Persistence for dramlog is a single named slot in a key-value backend:
//! one serialized value holding the whole ordered drink collection, replaced
//! wholesale on every write. There are no partial updates and no versioned
//! migration format.
//!
//! The layer is split in two:
//!
//! - [`SlotBackend`] handles the "how" of storage (filesystem vs memory):
//!   raw string payloads in and out of a named slot.
//! - [`DrinkStore`] handles the "what": encoding the drink collection,
//!   the corrupt-data policy, and the slot-name configuration.
//!
//! ## Failure policy
//!
//! - **Load is never fatal.** An absent slot means a fresh start; an
//!   unreadable or unparseable slot means a fresh start plus a
//!   [`StoreWarning::CorruptData`] for the caller to surface. Session start
//!   must always succeed.
//! - **Writes fail loudly and distinctly.** A write rejected for size maps
//!   to `QuotaExceeded`; a backend that cannot be written at all maps to
//!   `StorageUnavailable`. The caller decides whether to retry, surface, or
//!   discard; the store never retries on its own.
//!
//! ## Implementations
//!
//! - [`FsBackend`]: production backend, one JSON file per slot with atomic
//!   tmp-then-rename writes.
//! - [`MemBackend`]: for testing logic without filesystem I/O, with
//!   switchable write-failure simulation.

pub mod backend;
pub mod drink_store;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::SlotBackend;
pub use drink_store::{DrinkStore, LoadOutcome, StoreWarning, DEFAULT_SLOT};
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;

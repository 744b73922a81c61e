use super::backend::SlotBackend;
use crate::error::{DramlogError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

/// In-memory slot backend for testing.
///
/// Uses `RefCell` for interior mutability since dramlog is single-threaded.
/// This avoids the overhead of `RwLock` while still letting the
/// `SlotBackend` trait use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    simulate_quota_exceeded: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `StorageUnavailable`.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Make every subsequent write fail with `QuotaExceeded`.
    pub fn set_simulate_quota_exceeded(&self, simulate: bool) {
        *self.simulate_quota_exceeded.borrow_mut() = simulate;
    }

    fn write_guard(&self) -> Result<()> {
        if *self.simulate_quota_exceeded.borrow() {
            return Err(DramlogError::QuotaExceeded);
        }
        if *self.simulate_write_error.borrow() {
            return Err(DramlogError::StorageUnavailable(io::Error::other(
                "simulated write error",
            )));
        }
        Ok(())
    }
}

impl SlotBackend for MemBackend {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(slot).cloned())
    }

    fn write(&self, slot: &str, payload: &str) -> Result<()> {
        self.write_guard()?;
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        self.write_guard()?;
        self.slots.borrow_mut().remove(slot);
        Ok(())
    }
}

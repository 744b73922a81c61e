//! # The Ledger
//!
//! [`Ledger`] is the authoritative in-memory drink collection for a session,
//! kept in lockstep with the persistence slot. It is the sole owner and sole
//! mutator of both: UI clients never touch the slot directly, and the
//! complete sanctioned surface is `load_from_store` / `add` / `delete` /
//! `drinks` / `total_pure_alcohol` / `reset`.
//!
//! ## Consistency discipline
//!
//! Storage here is not transactional, so every mutation follows the same
//! pattern: mutate memory, persist the full sequence, and roll the memory
//! change back when the write fails. After any operation, successful or not,
//! the in-memory sequence matches what is durably stored, and the running
//! total always equals the sum over the held drinks.
//!
//! All operations are synchronous and run to completion; there is no
//! parallelism and therefore no locking.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{DramlogError, Result};
use crate::model::Drink;
use crate::store::{DrinkStore, LoadOutcome, SlotBackend, StoreWarning};
use crate::validate;

pub struct Ledger<B: SlotBackend> {
    store: DrinkStore<B>,
    drinks: Vec<Drink>,
    absorption_factor: f64,
}

impl<B: SlotBackend> Ledger<B> {
    pub fn new(store: DrinkStore<B>, absorption_factor: f64) -> Self {
        Self {
            store,
            drinks: Vec::new(),
            absorption_factor,
        }
    }

    /// Replaces the in-memory sequence with the slot's contents. Called once
    /// at session start. A corrupt slot is reported as a warning and the
    /// ledger proceeds empty; session start never fails.
    pub fn load_from_store(&mut self) -> Option<StoreWarning> {
        let LoadOutcome { drinks, warning } = self.store.load();
        self.drinks = drinks;
        warning
    }

    /// Validates the raw field values, logs a new drink and persists the
    /// full sequence. Validation always runs here, regardless of what the
    /// caller already checked. If the save fails the appended drink is
    /// removed again before the error propagates.
    pub fn add(&mut self, name: &str, strength_raw: &str, volume_raw: &str) -> Result<Drink> {
        let input = validate::validate(name, strength_raw, volume_raw)?;

        // Wall clocks can step backwards; creation order must not.
        let mut created_at = Utc::now();
        if let Some(last) = self.drinks.last() {
            created_at = created_at.max(last.created_at);
        }

        let drink = Drink::new(input, self.absorption_factor, created_at);
        self.drinks.push(drink.clone());

        if let Err(e) = self.store.save(&self.drinks) {
            self.drinks.pop();
            return Err(e);
        }
        Ok(drink)
    }

    /// Removes the drink with the given id and persists. Deleting an unknown
    /// id returns `NotFound` and leaves the ledger untouched, so repeating a
    /// delete is harmless. If the save fails the drink is re-inserted at its
    /// original position before the error propagates.
    pub fn delete(&mut self, id: &Uuid) -> Result<Drink> {
        let pos = self
            .drinks
            .iter()
            .position(|d| d.id == *id)
            .ok_or(DramlogError::NotFound(*id))?;
        let removed = self.drinks.remove(pos);

        if let Err(e) = self.store.save(&self.drinks) {
            self.drinks.insert(pos, removed);
            return Err(e);
        }
        Ok(removed)
    }

    /// All drinks, oldest first.
    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    /// Sum of pure alcohol over all held drinks, 0 for an empty ledger.
    /// Recomputed on demand so it can never go stale.
    pub fn total_pure_alcohol(&self) -> f64 {
        self.drinks.iter().map(|d| d.pure_alcohol).sum()
    }

    /// Full reset: removes the slot and empties the in-memory sequence.
    /// Memory is only touched once the slot removal has succeeded.
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()?;
        self.drinks.clear();
        Ok(())
    }

    pub fn absorption_factor(&self) -> f64 {
        self.absorption_factor
    }
}

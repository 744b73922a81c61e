use super::backend::SlotBackend;
use crate::error::Result;
use crate::model::Drink;

/// Slot name used when none is configured.
pub const DEFAULT_SLOT: &str = "drinks";

/// Non-fatal condition reported by [`DrinkStore::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreWarning {
    /// The slot exists but cannot be read or parsed as a drink collection.
    /// The session starts fresh; the stored payload stays untouched until
    /// the next save replaces it.
    CorruptData { detail: String },
}

/// Result of loading the persistence slot.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub drinks: Vec<Drink>,
    pub warning: Option<StoreWarning>,
}

/// Persistence adapter: the full ordered drink collection lives as one JSON
/// array in a single named slot, replaced wholesale on every write.
pub struct DrinkStore<B: SlotBackend> {
    backend: B,
    slot: String,
}

impl<B: SlotBackend> DrinkStore<B> {
    /// The slot name is explicit configuration, injected at construction;
    /// there is no implicit global storage location.
    pub fn new(backend: B, slot: impl Into<String>) -> Self {
        Self {
            backend,
            slot: slot.into(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// The underlying backend, mainly for tests that flip failure switches.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Reads the whole collection. Never fails: an absent slot yields an
    /// empty collection, an unreadable or unparseable one yields an empty
    /// collection plus a [`StoreWarning::CorruptData`].
    pub fn load(&self) -> LoadOutcome {
        let payload = match self.backend.read(&self.slot) {
            Ok(Some(payload)) => payload,
            Ok(None) => return LoadOutcome::default(),
            Err(e) => return corrupt(e.to_string()),
        };

        match serde_json::from_str(&payload) {
            Ok(drinks) => LoadOutcome {
                drinks,
                warning: None,
            },
            Err(e) => corrupt(e.to_string()),
        }
    }

    /// Serializes and writes the full collection atomically.
    pub fn save(&self, drinks: &[Drink]) -> Result<()> {
        let payload = serde_json::to_string_pretty(drinks)?;
        self.backend.write(&self.slot, &payload)
    }

    /// Removes the slot entirely. Full reset only; the add/delete flow
    /// always goes through `save`.
    pub fn clear(&self) -> Result<()> {
        self.backend.remove(&self.slot)
    }
}

fn corrupt(detail: String) -> LoadOutcome {
    LoadOutcome {
        drinks: Vec::new(),
        warning: Some(StoreWarning::CorruptData { detail }),
    }
}

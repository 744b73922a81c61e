use crate::error::Result;

/// Abstract interface for raw slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory), while
/// `DrinkStore` handles the "what" (collection encoding, corrupt-data
/// policy, slot naming).
pub trait SlotBackend {
    /// Read the slot's raw payload.
    /// Returns `Ok(None)` when the slot has never been written, which lets
    /// the caller distinguish "fresh" from "unreadable".
    fn read(&self, slot: &str) -> Result<Option<String>>;

    /// Replace the slot's entire payload.
    /// MUST be atomic (e.g. write to tmp then rename) so a failed write
    /// never leaves a half-written slot behind.
    fn write(&self, slot: &str, payload: &str) -> Result<()>;

    /// Remove the slot entirely. Removing an absent slot is not an error.
    fn remove(&self, slot: &str) -> Result<()>;
}

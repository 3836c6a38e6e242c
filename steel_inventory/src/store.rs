use crate::error::StoreResult;
use crate::models::{SteelInput, SteelItem};

/// Persistent collection of steel items.
///
/// Writes are pending until [`SteelStore::commit`]; reads through the same
/// store observe pending writes.
pub trait SteelStore {
    /// Every persisted item in insertion order
    fn list_all(&self) -> StoreResult<Vec<SteelItem>>;

    /// Persists a new item and returns it with its assigned id
    fn add(&mut self, input: &SteelInput) -> StoreResult<SteelItem>;

    /// Persists the mutable fields (name, weight, length) of an existing item
    fn update(&mut self, item: &SteelItem) -> StoreResult<()>;

    fn remove(&mut self, item: &SteelItem) -> StoreResult<()>;

    fn commit(&mut self) -> StoreResult<()>;

    /// Discards writes made since the last commit
    fn rollback(&mut self) -> StoreResult<()>;
}

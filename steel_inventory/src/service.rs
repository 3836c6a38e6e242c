//! In-memory view over the steel store.
//!
//! The service owns the authoritative snapshot of all items. Every mutation
//! goes to the store, is committed, and is followed by a full reload and a
//! fresh recomputation of the totals.

use crate::error::{InventoryResult, StoreError, StoreResult, ValidationError};
use crate::models::{ItemId, SteelForm, SteelInput, SteelItem};
use crate::store::SteelStore;
use crate::totals::Totals;
use serde::Serialize;

/// Result of a successful add request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// No item had the code; a new one was stored
    Created(SteelItem),
    /// The code existed with the same thickness; weight and length were added
    Merged(SteelItem),
}

impl AddOutcome {
    pub fn item(&self) -> &SteelItem {
        match self {
            AddOutcome::Created(item) | AddOutcome::Merged(item) => item,
        }
    }
}

/// Owned copy of the current list and totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySnapshot {
    pub items: Vec<SteelItem>,
    pub totals: Totals,
}

pub struct InventoryService<S> {
    store: S,
    items: Vec<SteelItem>,
    totals: Totals,
}

impl<S: SteelStore> InventoryService<S> {
    /// Loads every item from the store and computes the initial totals
    pub fn load(store: S) -> InventoryResult<Self> {
        let items = store.list_all()?;
        let totals = Totals::from_items(&items).map_err(StoreError::TotalsOverflow)?;
        log::info!("Loaded {} steel items", items.len());
        Ok(Self {
            store,
            items,
            totals,
        })
    }

    pub fn items(&self) -> &[SteelItem] {
        &self.items
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            items: self.items.clone(),
            totals: self.totals,
        }
    }

    pub fn find(&self, id: ItemId) -> Option<&SteelItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the snapshot with the store's current contents
    pub fn reload(&mut self) -> InventoryResult<()> {
        let items = self.store.list_all()?;
        self.totals = Totals::from_items(&items).map_err(StoreError::TotalsOverflow)?;
        self.items = items;
        Ok(())
    }

    /// Adds a new item, or merges into the item with the same code.
    ///
    /// The code is trimmed of surrounding whitespace, then the first item
    /// whose code equals it (case-sensitive) is the merge target. A thickness
    /// mismatch, or a request that would push either total past the largest
    /// `Decimal`, is rejected without touching the store.
    pub fn add_or_merge(&mut self, form: &SteelForm) -> InventoryResult<AddOutcome> {
        let input = SteelInput::parse(form).map_err(reject)?;

        let outcome = match self.items.iter().find(|item| item.code == input.code) {
            None => {
                self.check_totals(&input)?;
                let item = self.mutate(|store| store.add(&input))?;
                log::info!("Created steel item {} ({})", item.id, item.code);
                AddOutcome::Created(item)
            }
            Some(existing) => {
                let mut merged = existing.clone();
                merged.absorb(&input).map_err(reject)?;
                self.check_totals(&input)?;
                self.mutate(|store| store.update(&merged))?;
                log::info!(
                    "Merged into steel item {} ({}): weight {}, length {}",
                    merged.id,
                    merged.code,
                    merged.weight,
                    merged.length
                );
                AddOutcome::Merged(merged)
            }
        };
        Ok(outcome)
    }

    /// Deletes the selected item and returns it
    pub fn delete(&mut self, selected: Option<ItemId>) -> InventoryResult<SteelItem> {
        let item = self.selected_item(selected)?;
        self.mutate(|store| store.remove(&item))?;
        log::info!("Deleted steel item {} ({})", item.id, item.code);
        Ok(item)
    }

    /// Removes the selected item and hands back its fields as form text.
    ///
    /// The caller resubmits the form through [`InventoryService::add_or_merge`].
    pub fn load_for_edit(&mut self, selected: Option<ItemId>) -> InventoryResult<SteelForm> {
        let item = self.selected_item(selected)?;
        let form = SteelForm::from_item(&item);
        self.mutate(|store| store.remove(&item))?;
        log::info!("Loaded steel item {} ({}) for editing", item.id, item.code);
        Ok(form)
    }

    /// Rejects an add whose weight or length would overflow the running totals
    fn check_totals(&self, input: &SteelInput) -> Result<(), ValidationError> {
        self.totals
            .checked_add(input.weight, input.length)
            .map(|_| ())
            .map_err(|field| reject(ValidationError::QuantityOverflow(field)))
    }

    fn selected_item(&self, selected: Option<ItemId>) -> InventoryResult<SteelItem> {
        let id = selected.ok_or_else(|| {
            log::warn!("Rejected request: no item selected");
            ValidationError::NoSelection
        })?;
        self.find(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id).into())
    }

    /// Runs a write and commits it, then reloads.
    ///
    /// On failure pending writes are rolled back and the snapshot is reloaded
    /// from the store; if that also fails the last loaded snapshot is kept.
    fn mutate<T>(&mut self, op: impl FnOnce(&mut S) -> StoreResult<T>) -> InventoryResult<T> {
        let result = op(&mut self.store).and_then(|value| {
            self.store.commit()?;
            Ok(value)
        });

        match result {
            Ok(value) => {
                self.reload()?;
                Ok(value)
            }
            Err(e) => {
                log::error!("Store operation failed: {e}");
                self.resync();
                Err(e.into())
            }
        }
    }

    fn resync(&mut self) {
        if let Err(e) = self.store.rollback() {
            log::error!("Failed to roll back pending writes: {e}");
        }
        if let Err(e) = self.reload() {
            log::error!("Failed to reload steel items, keeping last snapshot: {e}");
        }
    }
}

fn reject(e: ValidationError) -> ValidationError {
    log::warn!("Rejected add request: {e}");
    e
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;

pub mod cli;
pub mod config;
pub mod error;
pub mod formatters;
pub mod inventory_db;
pub mod login;
pub mod models;
pub mod service;
pub mod store;
pub mod totals;
pub mod ui;

use std::path::Path;

// Re-export commonly used items
pub use config::{AppConfig, Args, Command};
pub use error::{InventoryError, InventoryResult, Notice, Severity, StoreError, ValidationError};
pub use inventory_db::SqliteStore;
pub use models::{Field, ItemId, SteelForm, SteelInput, SteelItem};
pub use service::{AddOutcome, InventoryService, InventorySnapshot};
pub use store::SteelStore;
pub use totals::Totals;

/// Opens the database at `path` and loads the full item list
pub fn open_inventory(path: &Path) -> InventoryResult<InventoryService<SqliteStore>> {
    let store = SqliteStore::open(path)?;
    InventoryService::load(store)
}

//! Local SQLite database holding the steel stock.
//!
//! - One row per item in `steel_items`; ids come from AUTOINCREMENT and are never reused.
//! - Decimals are stored as canonical TEXT so sums survive the round trip exactly.
//! - A transaction is opened lazily on the first write and closed by `commit`/`rollback`.

use crate::error::{StoreError, StoreResult};
use crate::models::{ItemId, SteelInput, SteelItem};
use crate::store::SteelStore;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

/// SQLite-backed [`SteelStore`]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file and initialises the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
                log::info!("Created directory: {}", parent.display());
            }
        }
        log::info!("Inventory DB: {}", path.display());
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// True while writes are waiting for `commit`
    pub fn has_pending_writes(&self) -> bool {
        !self.conn.is_autocommit()
    }

    fn begin_if_needed(&self) -> StoreResult<()> {
        if self.conn.is_autocommit() {
            self.conn.execute_batch("BEGIN")?;
        }
        Ok(())
    }
}

/// Creates the `steel_items` table if it does not already exist.
fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS steel_items (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT,
            code        TEXT NOT NULL,
            weight      TEXT NOT NULL,
            length      TEXT NOT NULL,
            thickness   TEXT NOT NULL
        );

        -- Lookup by business key; uniqueness is enforced when merging, not here
        CREATE INDEX IF NOT EXISTS idx_steel_items_code ON steel_items(code);",
    )?;
    log::debug!("Steel items schema initialised");
    Ok(())
}

fn decimal_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    let text: String = row.get(idx)?;
    Decimal::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<SteelItem> {
    Ok(SteelItem {
        id: ItemId(row.get(0)?),
        name: row.get(1)?,
        code: row.get(2)?,
        weight: decimal_column(row, 3)?,
        length: decimal_column(row, 4)?,
        thickness: decimal_column(row, 5)?,
    })
}

impl SteelStore for SqliteStore {
    fn list_all(&self) -> StoreResult<Vec<SteelItem>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, name, code, weight, length, thickness
             FROM steel_items
             ORDER BY id ASC",
        )?;
        let items = stmt
            .query_map([], item_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    fn add(&mut self, input: &SteelInput) -> StoreResult<SteelItem> {
        self.begin_if_needed()?;
        self.conn
            .prepare_cached(
                "INSERT INTO steel_items (name, code, weight, length, thickness)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?
            .execute(params![
                input.name,
                input.code,
                input.weight.to_string(),
                input.length.to_string(),
                input.thickness.to_string(),
            ])?;

        Ok(SteelItem {
            id: ItemId(self.conn.last_insert_rowid()),
            name: input.name.clone(),
            code: input.code.clone(),
            weight: input.weight,
            length: input.length,
            thickness: input.thickness,
        })
    }

    fn update(&mut self, item: &SteelItem) -> StoreResult<()> {
        self.begin_if_needed()?;
        let changed = self
            .conn
            .prepare_cached(
                "UPDATE steel_items
                 SET name = ?2, weight = ?3, length = ?4
                 WHERE id = ?1",
            )?
            .execute(params![
                item.id.0,
                item.name,
                item.weight.to_string(),
                item.length.to_string(),
            ])?;
        if changed == 0 {
            return Err(StoreError::NotFound(item.id));
        }
        Ok(())
    }

    fn remove(&mut self, item: &SteelItem) -> StoreResult<()> {
        self.begin_if_needed()?;
        let changed = self
            .conn
            .prepare_cached("DELETE FROM steel_items WHERE id = ?1")?
            .execute(params![item.id.0])?;
        if changed == 0 {
            return Err(StoreError::NotFound(item.id));
        }
        Ok(())
    }

    fn commit(&mut self) -> StoreResult<()> {
        if self.has_pending_writes() {
            self.conn.execute_batch("COMMIT")?;
        }
        Ok(())
    }

    fn rollback(&mut self) -> StoreResult<()> {
        if self.has_pending_writes() {
            self.conn.execute_batch("ROLLBACK")?;
        }
        Ok(())
    }
}

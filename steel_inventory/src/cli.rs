//! Headless subcommands over the same service the desktop window uses.

use crate::config::Command;
use crate::error::InventoryError;
use crate::formatters::{format_form, format_item_table, format_totals};
use crate::models::{ItemId, SteelForm};
use crate::service::{AddOutcome, InventoryService};
use crate::store::SteelStore;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Runs one command and returns the text to print
pub fn execute<S: SteelStore>(
    service: &mut InventoryService<S>,
    command: Command,
) -> Result<String, CliError> {
    let output = match command {
        Command::List { json: true } => {
            let mut text = serde_json::to_string_pretty(&service.snapshot())?;
            text.push('\n');
            text
        }
        Command::List { json: false } => format_item_table(service.items(), &service.totals()),
        Command::Add {
            name,
            code,
            weight,
            length,
            thickness,
        } => {
            let form = SteelForm {
                name,
                code,
                weight,
                length,
                thickness,
            };
            let summary = match service.add_or_merge(&form)? {
                AddOutcome::Created(item) => format!("Created item {} ({})", item.id, item.code),
                AddOutcome::Merged(item) => format!(
                    "Merged into item {} ({}): weight {} t, length {} m",
                    item.id, item.code, item.weight, item.length
                ),
            };
            format!("{summary}\n{}\n", format_totals(&service.totals()))
        }
        Command::Delete { id } => {
            let item = service.delete(Some(ItemId(id)))?;
            format!(
                "Deleted item {} ({})\n{}\n",
                item.id,
                item.code,
                format_totals(&service.totals())
            )
        }
        Command::Edit { id } => {
            let form = service.load_for_edit(Some(ItemId(id)))?;
            format!(
                "Removed item {id} for editing; resubmit with `add`:\n{}",
                format_form(&form)
            )
        }
        Command::Totals => format!("{}\n", format_totals(&service.totals())),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::inventory_db::SqliteStore;

    fn service() -> InventoryService<SqliteStore> {
        InventoryService::load(SqliteStore::open_in_memory().unwrap()).unwrap()
    }

    fn add(code: &str, weight: &str, thickness: &str) -> Command {
        Command::Add {
            name: String::new(),
            code: code.to_string(),
            weight: weight.to_string(),
            length: "10".to_string(),
            thickness: thickness.to_string(),
        }
    }

    #[test]
    fn add_then_merge_reports_outcome() {
        let mut service = service();
        let created = execute(&mut service, add("A1", "2.5", "3")).unwrap();
        assert!(created.starts_with("Created item 1 (A1)"));
        assert!(created.contains("Total weight: 2.5 t"));

        let merged = execute(&mut service, add("A1", "1.5", "3")).unwrap();
        assert!(merged.starts_with("Merged into item 1 (A1): weight 4.0 t, length 20 m"));
    }

    #[test]
    fn add_errors_are_passed_through() {
        let mut service = service();
        execute(&mut service, add("A1", "1", "3")).unwrap();
        let err = execute(&mut service, add("A1", "1", "5")).unwrap_err();
        assert!(matches!(
            err,
            CliError::Inventory(InventoryError::Validation(
                ValidationError::ThicknessMismatch { .. }
            ))
        ));
    }

    #[test]
    fn list_json_contains_items_and_totals() {
        let mut service = service();
        execute(&mut service, add("A1", "2.5", "3")).unwrap();
        let json = execute(&mut service, Command::List { json: true }).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["items"][0]["code"], "A1");
        assert_eq!(value["items"][0]["name"], serde_json::Value::Null);
        assert_eq!(value["items"][0]["weight"], "2.5");
        assert_eq!(value["totals"]["total_length"], "10");
    }

    #[test]
    fn delete_and_edit_remove_items() {
        let mut service = service();
        execute(&mut service, add("A1", "1", "3")).unwrap();
        execute(&mut service, add("B2", "2", "3")).unwrap();

        let deleted = execute(&mut service, Command::Delete { id: 1 }).unwrap();
        assert!(deleted.starts_with("Deleted item 1 (A1)"));

        let edited = execute(&mut service, Command::Edit { id: 2 }).unwrap();
        assert!(edited.contains("code: B2\n"));
        assert!(service.items().is_empty());

        let totals = execute(&mut service, Command::Totals).unwrap();
        assert_eq!(totals, "Total weight: 0 t    Total length: 0 m\n");
    }

    #[test]
    fn list_table_shows_items() {
        let mut service = service();
        execute(&mut service, add("A1", "1", "3")).unwrap();
        let table = execute(&mut service, Command::List { json: false }).unwrap();
        assert!(table.contains("A1"));
        assert!(table.ends_with("Total weight: 1 t    Total length: 10 m\n"));
    }
}

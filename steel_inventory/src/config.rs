use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_FILE: &str = "steel_inventory.db";
pub const DEFAULT_OPERATOR: &str = "Admin";

/// Steel stock inventory - tracks items by code with running weight and length totals
#[derive(Parser, Debug)]
#[command(name = "steel_inventory")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite database file (relative paths resolve against the working directory)
    #[arg(short, long, env = "STEEL_INVENTORY_DB", default_value = DEFAULT_DB_FILE)]
    pub database: PathBuf,

    /// Operator name accepted by the login screen
    #[arg(long, env = "STEEL_INVENTORY_OPERATOR", default_value = DEFAULT_OPERATOR)]
    pub operator: String,

    /// Run a single command instead of opening the desktop window
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all items with totals
    List {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add an item, merging into an existing item with the same code
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long)]
        code: String,
        /// Weight in tonnes
        #[arg(long, allow_hyphen_values = true)]
        weight: String,
        /// Length in meters
        #[arg(long, allow_hyphen_values = true)]
        length: String,
        #[arg(long, allow_hyphen_values = true)]
        thickness: String,
    },
    /// Delete the item with the given id
    Delete { id: i64 },
    /// Remove the item with the given id and print its fields for resubmission
    Edit { id: i64 },
    /// Print total weight and length
    Totals,
}

/// Runtime configuration resolved from command line and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub operator: String,
}

impl AppConfig {
    /// Resolves the database path against `working_dir` when it is relative
    pub fn resolve(args: &Args, working_dir: &Path) -> Self {
        let database_path = if args.database.is_absolute() {
            args.database.clone()
        } else {
            working_dir.join(&args.database)
        };
        Self {
            database_path,
            operator: args.operator.clone(),
        }
    }

    pub fn from_args(args: &Args) -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::resolve(args, &cwd))
    }
}

//! SQLite bootstrap for the shopping-list store.
//!
//! # Responsibility
//! - Open file-backed or in-memory connections with the pragmas the item
//!   store relies on.
//! - Bring the `items` schema up to the latest migration before first use.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`; a database written by a
//!   newer build is refused, never downgraded.
//! - `items.seq` is the insertion-order key; `items.uuid` is the stable
//!   identity handed to views.
//! - `SqliteItemStore::try_new` only accepts connections produced here.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Connection bootstrap and transport failures.
#[derive(Debug)]
pub enum DbError {
    /// Open, pragma, statement or commit failure reported by SQLite.
    Sqlite(rusqlite::Error),
    /// The file was migrated by a newer build.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

//! Item store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide query-all, insert and delete APIs over the `items` table.
//! - Keep SQL details inside the store boundary.
//!
//! # Invariants
//! - Inserts and deletes commit in a single transaction each.
//! - Read paths reject corrupt persisted rows instead of masking them.
//! - Position-based deletes resolve to a stable id before touching storage.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::item::{Item, ItemId, ItemValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ITEM_SELECT_SQL: &str = "SELECT uuid, title FROM items ORDER BY seq ASC;";
const REQUIRED_ITEM_COLUMNS: &[&str] = &["seq", "uuid", "title", "created_at"];

pub type StoreResult<T> = Result<T, StoreError>;

/// Coarse failure classification handed to views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The record was rejected before reaching storage.
    Validation,
    /// The underlying storage could not read or commit.
    Storage,
    /// The targeted item no longer exists.
    NotFound,
    /// The requested position lies outside the loaded sequence.
    OutOfRange,
}

impl FailureKind {
    /// Stable string id used in log lines and FFI envelopes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Storage => "storage",
            Self::NotFound => "not_found",
            Self::OutOfRange => "out_of_range",
        }
    }
}

/// Store error for item persistence and query operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(ItemValidationError),
    Db(DbError),
    NotFound(ItemId),
    PositionOutOfRange {
        position: usize,
        len: usize,
    },
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Fault raised by non-SQLite stores that cannot commit a write.
    WriteRejected(String),
    /// Fault raised by non-SQLite stores that cannot read.
    ReadRejected(String),
}

impl StoreError {
    /// Classifies this error for view-facing failure reporting.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(_) => FailureKind::Validation,
            Self::NotFound(_) => FailureKind::NotFound,
            Self::PositionOutOfRange { .. } => FailureKind::OutOfRange,
            Self::Db(_)
            | Self::InvalidData(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. }
            | Self::WriteRejected(_)
            | Self::ReadRejected(_) => FailureKind::Storage,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
            Self::PositionOutOfRange { position, len } => write!(
                f,
                "position {position} is out of range for {len} loaded item(s)"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted item data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it via db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
            Self::WriteRejected(message) => write!(f, "write rejected: {message}"),
            Self::ReadRejected(message) => write!(f, "read rejected: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ItemValidationError> for StoreError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence capability consumed by the list presenter.
pub trait ItemStore {
    /// Returns every stored item in insertion order.
    fn query_all(&self) -> StoreResult<Vec<Item>>;
    /// Persists one item in a single transaction.
    fn insert(&self, item: &Item) -> StoreResult<()>;
    /// Removes the item with `id` in a single transaction.
    fn delete(&self, id: ItemId) -> StoreResult<()>;

    /// Removes the item at `position` of a previously fetched snapshot.
    ///
    /// Returns the removed item. Out-of-range positions fail without touching
    /// storage.
    fn delete_at(&self, snapshot: &[Item], position: usize) -> StoreResult<Item> {
        let item = snapshot
            .get(position)
            .ok_or(StoreError::PositionOutOfRange {
                position,
                len: snapshot.len(),
            })?;
        self.delete(item.id())?;
        Ok(item.clone())
    }
}

/// SQLite-backed item store.
pub struct SqliteItemStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemStore<'conn> {
    /// Wraps a connection produced by `db::open_db`/`db::open_db_in_memory`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` when the schema shape
    ///   does not match the migrations.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(conn)?;
        if actual_version != expected_version {
            return Err(StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        ensure_items_schema(conn)?;
        Ok(Self { conn })
    }
}

impl ItemStore for SqliteItemStore<'_> {
    fn query_all(&self) -> StoreResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(ITEM_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }

    fn insert(&self, item: &Item) -> StoreResult<()> {
        item.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO items (uuid, title) VALUES (?1, ?2);",
            params![item.id().to_string(), item.title()],
        )?;
        tx.commit()?;

        Ok(())
    }

    fn delete(&self, id: ItemId) -> StoreResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        let changed = tx.execute("DELETE FROM items WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        tx.commit()?;

        Ok(())
    }
}

fn ensure_items_schema(conn: &Connection) -> StoreResult<()> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('items');")?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    if columns.is_empty() {
        return Err(StoreError::MissingRequiredTable("items"));
    }

    for &column in REQUIRED_ITEM_COLUMNS {
        if !columns.iter().any(|existing| existing.as_str() == column) {
            return Err(StoreError::MissingRequiredColumn {
                table: "items",
                column,
            });
        }
    }

    Ok(())
}

fn parse_item_row(row: &Row<'_>) -> StoreResult<Item> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{uuid_text}` in items.uuid"))
    })?;
    let title: String = row.get("title")?;

    Item::with_id(id, title)
        .map_err(|err| StoreError::InvalidData(format!("row `{uuid_text}`: {err}")))
}

#[cfg(test)]
mod tests {
    use super::{FailureKind, StoreError};
    use crate::model::item::ItemValidationError;
    use uuid::Uuid;

    #[test]
    fn kind_classifies_errors() {
        assert_eq!(
            StoreError::Validation(ItemValidationError::EmptyTitle).kind(),
            FailureKind::Validation
        );
        assert_eq!(
            StoreError::NotFound(Uuid::new_v4()).kind(),
            FailureKind::NotFound
        );
        assert_eq!(
            StoreError::PositionOutOfRange {
                position: 3,
                len: 1
            }
            .kind(),
            FailureKind::OutOfRange
        );
        assert_eq!(
            StoreError::WriteRejected("disk full".to_string()).kind(),
            FailureKind::Storage
        );
    }

    #[test]
    fn out_of_range_message_names_position_and_len() {
        let message = StoreError::PositionOutOfRange {
            position: 4,
            len: 2,
        }
        .to_string();
        assert!(message.contains('4'));
        assert!(message.contains('2'));
    }
}

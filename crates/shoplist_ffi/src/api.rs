//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose list/add/delete use-cases to Dart via FRB.
//! - Drive the core `ListScreen` so the mobile shell only renders rows.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Items cross the boundary with their stable id; deletes target ids.

use log::error;
use shoplist_core::db::open_db;
use shoplist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    FailureKind, ItemId, ListScreen, ListState, SqliteItemStore,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const DB_FILE_NAME: &str = "shoplist.sqlite3";
const DB_PATH_ENV: &str = "SHOPLIST_DB_PATH";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One row of the shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Stable item ID in string form.
    pub item_id: String,
    pub title: String,
}

/// Response envelope for loading the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemListResponse {
    pub ok: bool,
    /// Rows in insertion order.
    pub items: Vec<ListItem>,
    /// Text to show instead of the list while it is empty.
    pub placeholder: Option<String>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Response envelope for add/delete actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemActionResponse {
    pub ok: bool,
    /// Affected item ID.
    pub item_id: Option<String>,
    /// `validation|storage|not_found|out_of_range` when `ok == false`.
    pub failure_kind: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ItemActionResponse {
    fn success(message: impl Into<String>, item_id: ItemId) -> Self {
        Self {
            ok: true,
            item_id: Some(item_id.to_string()),
            failure_kind: None,
            message: message.into(),
        }
    }

    fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            item_id: None,
            failure_kind: Some(kind.as_str().to_string()),
            message: message.into(),
        }
    }
}

/// Loads every item in insertion order.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_items() -> ItemListResponse {
    match with_list_screen(|_| ()) {
        Ok((state, ())) => {
            if let Some(failure) = state.last_failure() {
                return list_failure(format!("list_items failed: {}", failure.message));
            }
            ItemListResponse {
                ok: true,
                items: state
                    .rows()
                    .iter()
                    .map(|row| ListItem {
                        item_id: row.id.to_string(),
                        title: row.title.clone(),
                    })
                    .collect(),
                placeholder: state.placeholder().map(str::to_string),
                message: format!("Loaded {} item(s).", state.len()),
            }
        }
        Err(err) => list_failure(err),
    }
}

/// Adds an item titled `title` (trimmed).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Blank titles are rejected with `failure_kind = "validation"`.
/// - Returns the created item ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn add_item(title: String) -> ItemActionResponse {
    match with_list_screen(|screen| screen.confirm_add(&title)) {
        Ok((_, false)) => {
            ItemActionResponse::failure(FailureKind::Validation, "Item title must not be empty.")
        }
        Ok((state, true)) => {
            if let Some(failure) = state.last_failure() {
                return ItemActionResponse::failure(
                    failure.kind,
                    format!("add_item failed: {}", failure.message),
                );
            }
            match state.rows().last() {
                Some(row) => ItemActionResponse::success("Item added.", row.id),
                None => ItemActionResponse::failure(
                    FailureKind::Storage,
                    "add_item failed: added row missing from list",
                ),
            }
        }
        Err(err) => ItemActionResponse::failure(FailureKind::Storage, err),
    }
}

/// Deletes the item with stable ID `item_id`.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Malformed IDs fail with `validation`; unknown IDs with `not_found`.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_item(item_id: String) -> ItemActionResponse {
    let id = match ItemId::parse_str(item_id.trim()) {
        Ok(id) => id,
        Err(err) => {
            return ItemActionResponse::failure(
                FailureKind::Validation,
                format!("delete_item failed: invalid item id `{item_id}`: {err}"),
            );
        }
    };

    match with_list_screen(|screen| screen.confirm_delete_item(id)) {
        Ok((state, ())) => match state.last_failure() {
            Some(failure) => ItemActionResponse::failure(
                failure.kind,
                format!("delete_item failed: {}", failure.message),
            ),
            None => ItemActionResponse::success("Item deleted.", id),
        },
        Err(err) => ItemActionResponse::failure(FailureKind::Storage, err),
    }
}

fn list_failure(message: String) -> ItemListResponse {
    ItemListResponse {
        ok: false,
        items: Vec::new(),
        placeholder: None,
        message,
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

/// Opens the DB, loads a screen, runs `f` on it and returns the final rows.
fn with_list_screen<T>(
    f: impl FnOnce(&mut ListScreen<SqliteItemStore<'_>>) -> T,
) -> Result<(ListState, T), String> {
    let conn = open_db(resolve_db_path()).map_err(|err| {
        error!("event=ffi_call module=ffi status=error error_code=db_open_failed error={err}");
        format!("DB open failed: {err}")
    })?;
    let store = SqliteItemStore::try_new(&conn).map_err(|err| {
        error!("event=ffi_call module=ffi status=error error_code=store_init_failed error={err}");
        format!("store init failed: {err}")
    })?;
    let mut screen = ListScreen::new(store);
    screen.did_load();
    let output = f(&mut screen);
    Ok((screen.state().clone(), output))
}

#[cfg(test)]
mod tests {
    use super::{
        add_item, core_version, delete_item, init_logging, list_items, ping, DB_FILE_NAME, DB_PATH,
    };
    use std::sync::OnceLock;
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEST_DB_DIR: OnceLock<tempfile::TempDir> = OnceLock::new();

    /// Pins the process-wide DB path to a scratch directory before any call
    /// resolves the default one.
    fn use_scratch_db() {
        let dir = TEST_DB_DIR.get_or_init(scratch_dir);
        let path = DB_PATH.get_or_init(|| dir.path().join(DB_FILE_NAME));
        assert!(path.starts_with(dir.path()));
    }

    fn scratch_dir() -> tempfile::TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn added_item_is_listed_and_can_be_deleted() {
        use_scratch_db();
        let title = unique_title("ffi-add");
        let added = add_item(format!("  {title}  "));
        assert!(added.ok, "{}", added.message);
        let item_id = added.item_id.clone().expect("add returns item_id");

        let listed = list_items();
        assert!(listed.ok, "{}", listed.message);
        assert!(listed
            .items
            .iter()
            .any(|item| item.item_id == item_id && item.title == title));

        let deleted = delete_item(item_id.clone());
        assert!(deleted.ok, "{}", deleted.message);
        assert!(!list_items()
            .items
            .iter()
            .any(|item| item.item_id == item_id));
    }

    #[test]
    fn add_item_rejects_blank_title() {
        use_scratch_db();
        let response = add_item("   ".to_string());
        assert!(!response.ok);
        assert_eq!(response.failure_kind.as_deref(), Some("validation"));
    }

    #[test]
    fn delete_item_rejects_malformed_id() {
        use_scratch_db();
        let response = delete_item("not-a-uuid".to_string());
        assert!(!response.ok);
        assert_eq!(response.failure_kind.as_deref(), Some("validation"));
    }

    #[test]
    fn delete_item_reports_unknown_id_as_not_found() {
        use_scratch_db();
        let response = delete_item(uuid::Uuid::new_v4().to_string());
        assert!(!response.ok);
        assert_eq!(response.failure_kind.as_deref(), Some("not_found"));
    }

    fn unique_title(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}

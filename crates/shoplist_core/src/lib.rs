//! Core domain logic for the shopping list.
//! Model, store, presenter and view contracts live here; front-ends only
//! render what the presenter tells them.

pub mod db;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemId, ItemRow, ItemValidationError};
pub use presenter::list_presenter::ListPresenter;
pub use store::item_store::{FailureKind, ItemStore, SqliteItemStore, StoreError, StoreResult};
pub use store::memory_store::InMemoryItemStore;
pub use view::{ItemsView, ListScreen, ListState, ViewFailure, EMPTY_PLACEHOLDER};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

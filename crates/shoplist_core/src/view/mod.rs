//! View contract and headless list view.
//!
//! # Responsibility
//! - Define the callbacks a presenter uses to update a display surface.
//! - Provide `ListState`, the in-memory row model every front-end renders.
//! - Provide `ListScreen`, which owns a presenter and forwards user intents.
//!
//! # Invariants
//! - Views never talk to a store directly.
//! - Empty titles are rejected before reaching the presenter.

mod list_screen;
mod list_state;

pub use list_screen::ListScreen;
pub use list_state::{ListState, EMPTY_PLACEHOLDER};

use crate::model::item::{ItemId, ItemRow};
use crate::store::item_store::{FailureKind, StoreError};

/// Failure notification delivered to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFailure {
    /// Classification the view can use to decide whether to show it.
    pub kind: FailureKind,
    /// Human-readable error message.
    pub message: String,
}

impl From<&StoreError> for ViewFailure {
    fn from(value: &StoreError) -> Self {
        Self {
            kind: value.kind(),
            message: value.to_string(),
        }
    }
}

/// Display surface driven by a list presenter.
///
/// Every callback is a synchronous instruction to mutate the view's ordered
/// rows and re-render.
pub trait ItemsView {
    /// Replaces all rows.
    fn on_items_retrieval(&mut self, rows: &[ItemRow]);
    /// Reload failed; the previous rows remain valid.
    fn on_items_retrieval_failure(&mut self, failure: &ViewFailure);
    /// Appends one committed row.
    fn on_item_add_success(&mut self, row: &ItemRow);
    /// The add did not commit.
    fn on_item_add_failure(&mut self, failure: &ViewFailure);
    /// Removes the row at `position`.
    fn on_item_deletion(&mut self, position: usize);
    /// Item `id` was deleted but is not part of the presenter's snapshot;
    /// drop its row if the view shows one.
    fn on_item_removed(&mut self, id: ItemId);
    /// The delete did not commit.
    fn on_item_deletion_failure(&mut self, failure: &ViewFailure);
}

//! Headless row model rendered by every front-end.
//!
//! # Invariants
//! - Rows mirror the presenter's snapshot in display order.
//! - A successful update clears the last reported failure.

use super::{ItemsView, ViewFailure};
use crate::model::item::{ItemId, ItemRow};
use log::{debug, warn};

/// Placeholder shown when the list has no rows.
pub const EMPTY_PLACEHOLDER: &str = "No stored items yet";

/// Headless list view: ordered rows plus the last reported failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    rows: Vec<ItemRow>,
    last_failure: Option<ViewFailure>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    /// Row titles in display order.
    pub fn titles(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.title.as_str()).collect()
    }

    /// Maps a stable item id back to its display row.
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the placeholder text while the list is empty.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(EMPTY_PLACEHOLDER)
    }

    pub fn last_failure(&self) -> Option<&ViewFailure> {
        self.last_failure.as_ref()
    }
}

impl ItemsView for ListState {
    fn on_items_retrieval(&mut self, rows: &[ItemRow]) {
        debug!(
            "event=view_update module=view action=replace_all count={}",
            rows.len()
        );
        self.rows = rows.to_vec();
        self.last_failure = None;
    }

    fn on_items_retrieval_failure(&mut self, failure: &ViewFailure) {
        warn!(
            "event=view_update module=view action=load_failed kind={}",
            failure.kind.as_str()
        );
        self.last_failure = Some(failure.clone());
    }

    fn on_item_add_success(&mut self, row: &ItemRow) {
        debug!(
            "event=view_update module=view action=append item_id={}",
            row.id
        );
        self.rows.push(row.clone());
        self.last_failure = None;
    }

    fn on_item_add_failure(&mut self, failure: &ViewFailure) {
        warn!(
            "event=view_update module=view action=add_failed kind={}",
            failure.kind.as_str()
        );
        self.last_failure = Some(failure.clone());
    }

    fn on_item_deletion(&mut self, position: usize) {
        debug!("event=view_update module=view action=remove position={position}");
        if position < self.rows.len() {
            self.rows.remove(position);
        }
        self.last_failure = None;
    }

    fn on_item_removed(&mut self, id: ItemId) {
        debug!("event=view_update module=view action=remove item_id={id}");
        if let Some(position) = self.position_of(id) {
            self.rows.remove(position);
        }
        self.last_failure = None;
    }

    fn on_item_deletion_failure(&mut self, failure: &ViewFailure) {
        warn!(
            "event=view_update module=view action=delete_failed kind={}",
            failure.kind.as_str()
        );
        self.last_failure = Some(failure.clone());
    }
}

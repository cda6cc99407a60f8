//! Shopping-list presenter.
//!
//! # Responsibility
//! - Load, add and delete items through an injected `ItemStore`.
//! - Keep the last loaded snapshot aligned with the rows shown by the view.
//!
//! # Invariants
//! - `snapshot` mirrors the view's rows: replaced on load, appended on a
//!   committed add, spliced on a committed delete.
//! - Every failure is reported to the view with a `FailureKind`.
//! - Log lines carry ids and lengths only, never titles.

use crate::model::item::{Item, ItemId, ItemRow};
use crate::store::item_store::{ItemStore, StoreError};
use crate::view::{ItemsView, ViewFailure};
use log::{debug, error, info, warn};

/// Presenter for the single shopping-list screen.
pub struct ListPresenter<S: ItemStore> {
    store: S,
    snapshot: Vec<Item>,
}

impl<S: ItemStore> ListPresenter<S> {
    /// Creates a presenter that owns `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            snapshot: Vec::new(),
        }
    }

    /// Items of the most recent load, adjusted by this presenter's writes.
    pub fn snapshot(&self) -> &[Item] {
        &self.snapshot
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reloads every item and replaces the view's rows.
    ///
    /// An empty store yields an empty row list. A read failure keeps the
    /// previous snapshot and is reported through
    /// `on_items_retrieval_failure`.
    pub fn on_view_ready(&mut self, view: &mut dyn ItemsView) {
        debug!("event=view_ready module=presenter status=start");
        match self.store.query_all() {
            Ok(items) => {
                let rows = items.iter().map(Item::to_row).collect::<Vec<_>>();
                self.snapshot = items;
                info!(
                    "event=items_load module=presenter status=ok count={}",
                    rows.len()
                );
                view.on_items_retrieval(&rows);
            }
            Err(err) => {
                error!(
                    "event=items_load module=presenter status=error kind={} error={err}",
                    err.kind().as_str()
                );
                view.on_items_retrieval_failure(&ViewFailure::from(&err));
            }
        }
    }

    /// Creates and persists an item titled `title`.
    ///
    /// Callers reject empty titles before calling; the store still refuses
    /// them with a validation failure.
    pub fn on_add_requested(&mut self, view: &mut dyn ItemsView, title: &str) {
        let item = Item::new(title);
        debug!(
            "event=item_add module=presenter status=start item_id={} title_len={}",
            item.id(),
            title.chars().count()
        );

        match self.store.insert(&item) {
            Ok(()) => {
                let row = item.to_row();
                self.snapshot.push(item);
                info!(
                    "event=item_add module=presenter status=ok item_id={}",
                    row.id
                );
                view.on_item_add_success(&row);
            }
            Err(err) => {
                error!(
                    "event=item_add module=presenter status=error item_id={} kind={} error={err}",
                    item.id(),
                    err.kind().as_str()
                );
                view.on_item_add_failure(&ViewFailure::from(&err));
            }
        }
    }

    /// Deletes the item shown at `position` of the current rows.
    pub fn on_delete_requested(&mut self, view: &mut dyn ItemsView, position: usize) {
        debug!("event=item_delete module=presenter status=start position={position}");
        match self.store.delete_at(&self.snapshot, position) {
            Ok(removed) => {
                self.snapshot.remove(position);
                info!(
                    "event=item_delete module=presenter status=ok position={position} item_id={}",
                    removed.id()
                );
                view.on_item_deletion(position);
            }
            Err(err) => self.report_delete_failure(view, &err),
        }
    }

    /// Deletes an item by stable id.
    ///
    /// A committed delete always ends in a success callback: a splice when
    /// the item is in the snapshot, `on_item_removed` otherwise.
    pub fn on_delete_item_requested(&mut self, view: &mut dyn ItemsView, id: ItemId) {
        debug!("event=item_delete module=presenter status=start item_id={id}");
        if let Err(err) = self.store.delete(id) {
            self.report_delete_failure(view, &err);
            return;
        }

        match self.position_of(id) {
            Some(position) => {
                self.snapshot.remove(position);
                info!(
                    "event=item_delete module=presenter status=ok position={position} item_id={id}"
                );
                view.on_item_deletion(position);
            }
            None => {
                info!("event=item_delete module=presenter status=ok item_id={id} loaded=false");
                view.on_item_removed(id);
            }
        }
    }

    /// Current rows in display order.
    pub fn rows(&self) -> Vec<ItemRow> {
        self.snapshot.iter().map(Item::to_row).collect()
    }

    fn position_of(&self, id: ItemId) -> Option<usize> {
        self.snapshot.iter().position(|item| item.id() == id)
    }

    fn report_delete_failure(&self, view: &mut dyn ItemsView, err: &StoreError) {
        warn!(
            "event=item_delete module=presenter status=error kind={} error={err}",
            err.kind().as_str()
        );
        view.on_item_deletion_failure(&ViewFailure::from(err));
    }
}

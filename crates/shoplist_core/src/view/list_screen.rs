//! Screen controller owning a list presenter.
//!
//! # Invariants
//! - Blank input never reaches the presenter.

use super::ListState;
use crate::model::item::ItemId;
use crate::presenter::list_presenter::ListPresenter;
use crate::store::item_store::ItemStore;
use log::debug;

/// Screen that owns its presenter and renders into a `ListState`.
///
/// User-interaction handlers of a front-end call the `confirm_*`/`did_load`
/// methods; the rows to draw are read back from [`ListScreen::state`].
pub struct ListScreen<S: ItemStore> {
    presenter: ListPresenter<S>,
    state: ListState,
}

impl<S: ItemStore> ListScreen<S> {
    pub fn new(store: S) -> Self {
        Self {
            presenter: ListPresenter::new(store),
            state: ListState::new(),
        }
    }

    /// Screen finished loading: fetch all rows.
    pub fn did_load(&mut self) {
        self.presenter.on_view_ready(&mut self.state);
    }

    /// Add prompt confirmed with `input`.
    ///
    /// Returns `false` when the trimmed input is empty; the presenter is not
    /// called in that case.
    pub fn confirm_add(&mut self, input: &str) -> bool {
        let title = input.trim();
        if title.is_empty() {
            debug!("event=add_rejected module=view reason=empty_title");
            return false;
        }
        self.presenter.on_add_requested(&mut self.state, title);
        true
    }

    /// Row delete gesture confirmed at `position`.
    pub fn confirm_delete(&mut self, position: usize) {
        self.presenter
            .on_delete_requested(&mut self.state, position);
    }

    /// Delete confirmed for the row showing item `id`.
    pub fn confirm_delete_item(&mut self, id: ItemId) {
        self.presenter.on_delete_item_requested(&mut self.state, id);
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn presenter(&self) -> &ListPresenter<S> {
        &self.presenter
    }
}

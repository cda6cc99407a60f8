//! In-memory item store.
//!
//! # Responsibility
//! - Substitute for `SqliteItemStore` in presenter/view tests and previews.
//! - Simulate read and commit failures on demand.
//!
//! # Invariants
//! - Same validation and ordering contract as the SQLite store.
//! - A rejected write leaves the stored items untouched.

use crate::model::item::{Item, ItemId};
use crate::store::item_store::{ItemStore, StoreError, StoreResult};
use std::cell::{Cell, RefCell};

/// Vec-backed store with read/write fault injection.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RefCell<Vec<Item>>,
    fail_writes: Cell<bool>,
    fail_reads: Cell<bool>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with items built from `titles`.
    pub fn with_titles<I, T>(titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .extend(titles.into_iter().map(Item::new));
        store
    }

    /// Makes every subsequent insert/delete fail until reset.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Makes every subsequent `query_all` fail until reset.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Returns the stored titles in insertion order.
    pub fn titles(&self) -> Vec<String> {
        self.items
            .borrow()
            .iter()
            .map(|item| item.title().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::WriteRejected(
                "simulated commit failure".to_string(),
            ));
        }
        Ok(())
    }
}

impl ItemStore for InMemoryItemStore {
    fn query_all(&self) -> StoreResult<Vec<Item>> {
        if self.fail_reads.get() {
            return Err(StoreError::ReadRejected(
                "simulated read failure".to_string(),
            ));
        }
        Ok(self.items.borrow().clone())
    }

    fn insert(&self, item: &Item) -> StoreResult<()> {
        item.validate()?;
        self.check_writable()?;
        self.items.borrow_mut().push(item.clone());
        Ok(())
    }

    fn delete(&self, id: ItemId) -> StoreResult<()> {
        self.check_writable()?;
        let mut items = self.items.borrow_mut();
        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        items.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryItemStore;
    use crate::model::item::Item;
    use crate::store::item_store::{ItemStore, StoreError};

    #[test]
    fn failed_insert_leaves_items_untouched() {
        let store = InMemoryItemStore::with_titles(["Milk"]);
        store.set_fail_writes(true);

        let err = store.insert(&Item::new("Bread")).unwrap_err();
        assert!(matches!(err, StoreError::WriteRejected(_)));
        assert_eq!(store.titles(), vec!["Milk"]);
    }

    #[test]
    fn insert_rejects_empty_title_even_when_writable() {
        let store = InMemoryItemStore::new();
        let err = store.insert(&Item::new("")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.is_empty());
    }
}

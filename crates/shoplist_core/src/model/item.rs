//! Item domain model.
//!
//! # Responsibility
//! - Define the single persisted record of the shopping list.
//! - Provide construction-time validation shared by all stores.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `title` is non-empty and never mutated after construction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a shopping-list item.
pub type ItemId = Uuid;

/// Validation failures for [`Item`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    /// The nil UUID cannot identify an item.
    NilId,
    /// Titles must contain at least one character.
    EmptyTitle,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "item id must not be the nil uuid"),
            Self::EmptyTitle => write!(f, "item title must not be empty"),
        }
    }
}

impl Error for ItemValidationError {}

/// Persisted shopping-list record.
///
/// Deserialization goes through [`Item::with_id`], so decoded items are
/// always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemFields")]
pub struct Item {
    id: ItemId,
    title: String,
}

#[derive(Deserialize)]
struct ItemFields {
    id: ItemId,
    title: String,
}

impl TryFrom<ItemFields> for Item {
    type Error = ItemValidationError;

    fn try_from(value: ItemFields) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.title)
    }
}

impl Item {
    /// Creates a new item with a generated stable ID.
    ///
    /// The title is not validated here; stores validate before every write.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
        }
    }

    /// Creates an item with a caller-provided ID.
    ///
    /// Used when rebuilding items from storage.
    pub fn with_id(id: ItemId, title: impl Into<String>) -> Result<Self, ItemValidationError> {
        let item = Self {
            id,
            title: title.into(),
        };
        item.validate()?;
        Ok(item)
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        if self.title.is_empty() {
            return Err(ItemValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Projects this item into the row shape consumed by views.
    pub fn to_row(&self) -> ItemRow {
        ItemRow {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

/// Display row handed from the presenter to a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRow {
    /// Stable item id the view uses to map rows back to items.
    pub id: ItemId,
    /// Text rendered for the row.
    pub title: String,
}

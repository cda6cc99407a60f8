//! Domain model for the shopping list.
//!
//! # Responsibility
//! - Define the canonical record persisted by every store implementation.
//! - Define the display projection handed to views.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`, never by list position.
//! - Deletion is a hard delete; there are no tombstones.

pub mod item;

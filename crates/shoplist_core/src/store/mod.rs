//! Store layer: the persistence contract consumed by the presenter.
//!
//! # Responsibility
//! - Define the `ItemStore` capability injected into presenters.
//! - Provide the SQLite implementation and an in-memory substitute.
//!
//! # Invariants
//! - Every write runs inside one atomic transaction.
//! - Write paths call `Item::validate()` before mutating storage.
//! - `query_all` returns items in insertion order.

pub mod item_store;
pub mod memory_store;

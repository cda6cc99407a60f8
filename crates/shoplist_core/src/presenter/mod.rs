//! Presenters mediating between stores and views.
//!
//! # Responsibility
//! - Translate view intents into store operations.
//! - Translate store results and errors into view callbacks.
//!
//! # Invariants
//! - Presenters own their store; views are borrowed per call, never held.
//! - Success callbacks fire only after the corresponding write committed.

pub mod list_presenter;

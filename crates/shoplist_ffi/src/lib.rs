//! Flutter-facing bindings for the shopping-list core.

pub mod api;

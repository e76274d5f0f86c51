//! Inventory store.
//!
//! Owns the authoritative id → product mapping for one warehouse. The store is
//! an explicitly constructed value (no process-wide singleton); callers share it
//! by reference or `Arc` and every read hands out a point-in-time snapshot.

pub mod store;

pub use store::{SharedProduct, Warehouse};

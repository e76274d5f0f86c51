//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two categories
/// named `"Dairy"` are the same category no matter where they were created.
///
/// - **Value Object**: no identity (`Category`, prices, weights)
/// - **Entity**: has identity (`Product`, keyed by `ProductId`)
///
/// The `Eq + Hash` bounds let value objects act as grouping keys in the
/// analytics layer.
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}

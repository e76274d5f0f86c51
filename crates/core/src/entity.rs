//! Identity for tracked catalog records.

use core::fmt::{Debug, Display};
use core::hash::Hash;

/// A record the warehouse tracks by identity rather than by value.
///
/// Two records with the same id describe the same product even when their
/// mutable fields (price) differ.
pub trait Entity {
    type Id: Copy + Ord + Hash + Debug + Display;

    fn id(&self) -> &Self::Id;

    fn same_identity<E: Entity<Id = Self::Id>>(&self, other: &E) -> bool {
        self.id() == other.id()
    }
}

//! Catalog records identified by id rather than by their attributes.
//!
//! Two products with the same `ProductId` are the same catalog entry even if
//! one copy carries stale price or stock data, so lookups and ordering checks
//! compare ids and never whole records.

use core::fmt::Debug;
use core::hash::Hash;

/// A record with a stable identity inside the catalog.
pub trait Entity {
    /// Identifier type; hashable so stores can index by it.
    type Id: Clone + Eq + Hash + Debug;

    fn id(&self) -> &Self::Id;

    /// Whether this record is the one addressed by `id`.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }

    /// Whether `other` is the same catalog entry, regardless of attribute values.
    fn same_entry(&self, other: &Self) -> bool {
        self.has_id(other.id())
    }
}

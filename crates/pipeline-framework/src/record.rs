//! # Record Trait
//!
//! The `Record` trait is the contract every item flowing through a pipeline satisfies:
//! it has a stable identifier. Caches and indexes store ids instead of clones of the
//! items, and resolve them back against the original collection with [`select_by_ids`].

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// An item with a stable identity.
///
/// Two records with the same id are the same record for the purpose of caching and
/// lookups, even if one of them is a derived copy (a discounted order keeps its id).
pub trait Record: Clone {
    /// The unique identifier for this record (e.g. `OrderId`, `u32`).
    type Id: Eq + Hash + Clone + Display + Debug;

    /// Returns the record's identifier.
    fn id(&self) -> Self::Id;
}

/// Returns clones of the records in `items` whose id appears in `ids`.
///
/// The result follows the order of `items`, not the order of `ids`.
pub fn select_by_ids<T: Record>(items: &[T], ids: &[T::Id]) -> Vec<T> {
    items
        .iter()
        .filter(|item| ids.contains(&item.id()))
        .cloned()
        .collect()
}

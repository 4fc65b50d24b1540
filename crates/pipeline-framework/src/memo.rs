//! # Memoization
//!
//! A [`Memoizer`] is an explicit cache object: it has a name (used in logs), an owner
//! (whoever holds the `&mut`), and a defined eviction policy. The policy is **unbounded**:
//! entries live until [`Memoizer::clear`] is called or the memoizer is dropped. Keep a
//! memoizer scoped to the data it was computed from.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// An unbounded key → value cache with hit/miss counters.
#[derive(Debug, Clone)]
pub struct Memoizer<K, V> {
    name: &'static str,
    cache: HashMap<K, V>,
    hits: u64,
    misses: u64,
}

impl<K: Eq + Hash + Debug, V> Memoizer<K, V> {
    /// Creates an empty cache. `name` identifies it in trace output.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            cache: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        match self.cache.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                debug!(cache = self.name, key = ?entry.key(), "Cache hit");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                debug!(cache = self.name, key = ?entry.key(), "Cache miss");
                let value = compute(entry.key());
                entry.insert(value)
            }
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.cache.contains_key(key)
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drops every entry. Counters are kept.
    pub fn clear(&mut self) {
        debug!(cache = self.name, evicted = self.cache.len(), "Cache cleared");
        self.cache.clear();
    }
}

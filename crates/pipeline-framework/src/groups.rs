//! # Ordered Grouping
//!
//! [`OrderedGroups`] is a grouping map that iterates its keys in the order they were
//! first inserted. Building reports from a plain `HashMap` makes the output order depend
//! on the hasher; here the first order seen for a user is the first group printed.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// A map from key to the list of values grouped under it, with insertion-order keys.
///
/// # Implementation Details
///
/// Groups live in a `Vec<(K, Vec<V>)>` in first-seen order. A side `HashMap` maps each
/// key to its slot so `insert` and `get` stay O(1).
#[derive(Debug, Clone)]
pub struct OrderedGroups<K, V> {
    index: HashMap<K, usize>,
    groups: Vec<(K, Vec<V>)>,
}

impl<K, V> Default for OrderedGroups<K, V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> OrderedGroups<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the group for `key`, creating the group at the end if needed.
    pub fn insert(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&slot) => self.groups[slot].1.push(value),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![value]));
            }
        }
    }

    /// Values grouped under `key`. Accepts any borrowed form of the key, as
    /// `HashMap::get` does (`&str` for `String` keys).
    pub fn get<Q>(&self, key: &Q) -> Option<&[V]>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index
            .get(key)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Number of groups (distinct keys).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of values across all groups.
    pub fn values_len(&self) -> usize {
        self.groups.iter().map(|(_, values)| values.len()).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.groups
            .iter()
            .map(|(key, values)| (key, values.as_slice()))
    }
}

impl<K, V> IntoIterator for OrderedGroups<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = std::vec::IntoIter<(K, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Groups `items` by the key returned from `key`, preserving first-seen key order and
/// the relative order of items inside each group.
pub fn group_by<I, K, V, F>(items: I, key: F) -> OrderedGroups<K, V>
where
    I: IntoIterator<Item = V>,
    K: Eq + Hash + Clone,
    F: Fn(&V) -> K,
{
    let mut groups = OrderedGroups::new();
    for item in items {
        groups.insert(key(&item), item);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_follow_first_insertion() {
        let mut groups = OrderedGroups::new();
        groups.insert("b", 1);
        groups.insert("a", 2);
        groups.insert("b", 3);

        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(groups.get(&"b"), Some(&[1, 3][..]));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.values_len(), 3);
    }

    #[test]
    fn test_missing_key() {
        let groups: OrderedGroups<u32, u32> = OrderedGroups::new();
        assert!(groups.is_empty());
        assert_eq!(groups.get(&1), None);
    }

    #[test]
    fn test_string_keys_looked_up_by_str() {
        let groups = group_by(["red apple", "green pear", "red cherry"], |s| {
            s.split(' ').next().unwrap_or_default().to_string()
        });

        assert_eq!(groups.get("red"), Some(&["red apple", "red cherry"][..]));
        assert_eq!(groups.get("green").map(<[_]>::len), Some(1));
        assert_eq!(groups.get("blue"), None);
    }

    #[test]
    fn test_group_by_parity() {
        let groups = group_by(1..=6, |n| n % 2 == 0);
        let collected: Vec<_> = groups.into_iter().collect();
        assert_eq!(collected, vec![(false, vec![1, 3, 5]), (true, vec![2, 4, 6])]);
    }
}

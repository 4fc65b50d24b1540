//! Top-N selection.

use std::cmp::Reverse;

/// Returns at most `n` clones of `items`, sorted descending by `key`.
///
/// The sort is stable: items with equal keys keep their relative input order. `key` is
/// evaluated once per item. `n == 0` yields an empty vector and `n` larger than the
/// input yields every item.
pub fn top_n_by<T, K, F>(items: &[T], n: usize, key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if n == 0 {
        return Vec::new();
    }

    let mut sorted = items.to_vec();
    sorted.sort_by_cached_key(|item| Reverse(key(item)));
    sorted.truncate(n);
    sorted
}

//! # Memoized Category Search
//!
//! [`CategorySearch`] answers "which orders contain a product from this category?"
//! over a fixed, borrowed slice of orders, caching the answer per category.
//!
//! The cache stores order ids rather than orders, and the slice is borrowed immutably
//! for the searcher's whole lifetime, so a cached answer always describes the same
//! orders it was computed from. Order totals are never cached here.
//!
//! Eviction is unbounded (see [`Memoizer`]): the cache grows by one entry per
//! distinct category searched. Call [`CategorySearch::clear`] to reset it.

use crate::model::{Order, OrderId};
use pipeline_framework::record::select_by_ids;
use pipeline_framework::Memoizer;

pub struct CategorySearch<'a> {
    orders: &'a [Order],
    cache: Memoizer<String, Vec<OrderId>>,
}

impl<'a> CategorySearch<'a> {
    pub fn new(orders: &'a [Order]) -> Self {
        Self {
            orders,
            cache: Memoizer::new("category_search"),
        }
    }

    /// Orders containing at least one item in `category`, in input order.
    ///
    /// Same result as [`find_by_category`](crate::analytics::find_by_category); repeated
    /// calls for the same category are served from the cache.
    pub fn find(&mut self, category: &str) -> Vec<Order> {
        let orders = self.orders;
        let ids = self
            .cache
            .get_or_insert_with(category.to_string(), |category| {
                orders
                    .iter()
                    .filter(|order| order.has_category(category))
                    .map(|order| order.id())
                    .collect()
            });
        select_by_ids(orders, ids)
    }

    pub fn hits(&self) -> u64 {
        self.cache.hits()
    }

    pub fn misses(&self) -> u64 {
        self.cache.misses()
    }

    /// Number of distinct categories currently cached.
    pub fn cached_categories(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

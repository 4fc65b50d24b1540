//! # Pipeline Framework
//!
//! This crate provides the generic building blocks for writing data pipelines in a
//! functional style: **filter → transform → aggregate** over in-memory collections.
//! Nothing here knows about users, products or orders. The domain crate plugs its own
//! types into these pieces.
//!
//! ## Why a separate crate?
//!
//! Grouping, ranking, composition and memoization show up in every analytics task.
//! Writing them once, generically, keeps the domain code down to the actual business
//! rules (how an order total is computed, which orders count as revenue, ...).
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`Record`]) - What an item in a pipeline looks like (it has an id)
//! 2. **Collection Layer** ([`OrderedGroups`], [`rank`]) - Grouping and top-N selection
//! 3. **Composition Layer** ([`Pipeline`], [`compose`]) - Chaining stages together
//! 4. **Caching Layer** ([`Memoizer`]) - Explicit result caches
//!
//! ## Core Abstractions
//!
//! ### [`OrderedGroups`] - Grouping that remembers order
//!
//! A `HashMap` forgets the order keys were first seen in. Reports usually should not.
//!
//! ```rust
//! use pipeline_framework::group_by;
//!
//! let words = ["apple", "bob", "avocado", "banana", "cherry"];
//! let groups = group_by(words, |w| w.chars().next().unwrap());
//!
//! let keys: Vec<char> = groups.keys().copied().collect();
//! assert_eq!(keys, vec!['a', 'b', 'c']);
//! assert_eq!(groups.get(&'a'), Some(&["apple", "avocado"][..]));
//! ```
//!
//! ### [`Pipeline`] - Left-to-right composition
//!
//! ```rust
//! use pipeline_framework::Pipeline;
//!
//! let pipeline = Pipeline::new()
//!     .pipe(|x: i32| x + 5)
//!     .pipe(|x| x * 3)
//!     .pipe(|x| x - 10);
//!
//! assert_eq!(pipeline.run(5), 20);
//! ```
//!
//! ### [`Memoizer`] - Caching with an explicit owner
//!
//! ```rust
//! use pipeline_framework::Memoizer;
//!
//! let mut cache = Memoizer::new("squares");
//! assert_eq!(cache.get_or_insert_with(4, |n| n * n), &16);
//! assert_eq!(cache.get_or_insert_with(4, |n| n * n), &16);
//! assert_eq!((cache.hits(), cache.misses()), (1, 1));
//! ```
//!
//! ## Concurrency Model
//!
//! Everything in this crate is synchronous and single-threaded. Functions take
//! borrowed input and return fresh values; only [`Memoizer`] holds state, and it
//! requires `&mut self` to record it.

pub mod groups;
pub mod memo;
pub mod pipeline;
pub mod rank;
pub mod record;
pub mod tracing;

// Re-export core types for convenience
pub use groups::{group_by, OrderedGroups};
pub use memo::Memoizer;
pub use pipeline::{compose, Pipeline};
pub use rank::top_n_by;
pub use record::Record;

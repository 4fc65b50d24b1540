//! # Order Analytics
//!
//! > **Filter → transform → aggregate over in-memory orders.**
//!
//! This crate computes reports over a small catalogue of users, products and orders:
//! totals, per-status counts, per-user spending, top-N rankings, category search and
//! summary statistics. Every operation is a pure function over borrowed data and returns
//! a fresh value.
//!
//! ## Design Notes
//!
//! ### 1. Exact money
//! Prices and totals are [`rust_decimal::Decimal`]. `1059.97 + 1999.99 + 239.97 + 109.94`
//! is exactly `3409.87`, so reports and tests compare amounts with `==`.
//!
//! ### 2. Immutable records
//! [`Order`](model::Order) items are fixed at construction. A discount produces a new
//! order ([`apply_discount`](analytics::apply_discount)); the original is untouched. The
//! order total is recomputed on every call and never stored.
//!
//! ### 3. Explicit empty results
//! [`statistics`](analytics::statistics) returns `None` for an empty batch instead of
//! dividing by zero.
//!
//! ### 4. Ordered grouping
//! Groupings come back as [`OrderedGroups`](pipeline_framework::OrderedGroups): keys
//! iterate in first-seen order, so report output is stable.
//!
//! ## Module Tour
//!
//! - [`model`]: `User`, `Product`, `OrderItem`, `Order`, `OrderStatus` and typed ids.
//! - [`analytics`]: the report operations.
//! - [`search`]: [`CategorySearch`](search::CategorySearch), a memoized category lookup.
//! - [`seed`]: the demo dataset.
//! - [`config`]: [`AnalyticsConfig`](config::AnalyticsConfig) for a report run.
//! - [`error`]: [`AnalyticsError`](error::AnalyticsError).
//!
//! ## Quick Start
//!
//! ```rust
//! use order_analytics::analytics::{statistics, top_expensive};
//! use order_analytics::seed::seed_data;
//! use rust_decimal_macros::dec;
//!
//! let data = seed_data().unwrap();
//!
//! let top: Vec<u32> = top_expensive(&data.orders, 2).iter().map(|o| o.id().0).collect();
//! assert_eq!(top, vec![2, 1]);
//!
//! let stats = statistics(&data.orders).unwrap();
//! assert_eq!(stats.total_revenue, dec!(3409.87));
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod analytics;
pub mod config;
pub mod error;
pub mod model;
pub mod search;
pub mod seed;

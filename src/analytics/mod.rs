//! # Order Analytics
//!
//! Pure functions over slices of [`Order`](crate::model::Order)s. Nothing in this module
//! mutates its input or keeps state between calls; every result is a fresh value.
//!
//! - [`orders`]: per-order operations (totals, filters, discounts, top-N, search)
//! - [`users`]: per-user aggregation (grouping, spending, summaries)
//! - [`stats`]: summary statistics over a batch of orders
//! - [`catalogue`]: product catalogue grouping

pub mod catalogue;
pub mod orders;
pub mod stats;
pub mod users;

pub use catalogue::*;
pub use orders::*;
pub use stats::*;
pub use users::*;

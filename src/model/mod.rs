//! Immutable domain records: users, products and orders.
//!
//! [`Order`] implements [`Record`](pipeline_framework::Record) so caches can hold order
//! ids and resolve them back against the order slice they came from.

pub mod order;
pub mod product;
pub mod user;

pub use order::*;
pub use product::*;
pub use user::*;

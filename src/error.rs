//! Error types for the order analytics crate.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while building the dataset or running analytics.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticsError {
    /// A discount rate outside `[0, 1)` was requested.
    #[error("Invalid discount rate: {0} (expected 0 <= rate < 1)")]
    InvalidDiscountRate(Decimal),

    /// A product was given a negative price.
    #[error("Negative price for product {product}: {price}")]
    NegativePrice { product: String, price: Decimal },

    /// A product price exceeds [`MAX_UNIT_PRICE`](crate::model::MAX_UNIT_PRICE).
    #[error("Price too large for product {product}: {price}")]
    PriceTooLarge { product: String, price: Decimal },

    /// An order line was given a quantity below one.
    #[error("Invalid quantity for product {product}: {quantity}")]
    InvalidQuantity { product: String, quantity: u32 },

    /// An order status string did not match any known status.
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    /// The analytics configuration is inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

use crate::error::AnalyticsError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Highest accepted unit price.
///
/// A line is at most `MAX_UNIT_PRICE × u32::MAX` (about 4.3e18), so summing totals
/// stays far below `Decimal::MAX` (about 7.9e28) for any batch that fits in memory.
pub const MAX_UNIT_PRICE: Decimal = dec!(1000000000);

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Represents a product in the catalogue.
///
/// Prices are exact decimals and never negative; [`Product::new`] enforces this and
/// there is no way to change a price in place. A discounted product is a new value
/// (see [`Product::with_price`]). Deserialization goes through [`Product::new`], so
/// the same checks apply to JSON input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    category: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `name` - Product name
    /// * `price` - Unit price, `0 <= price <= MAX_UNIT_PRICE`
    /// * `category` - Catalogue category (e.g. `"electronics"`)
    ///
    /// # Errors
    /// Returns [`AnalyticsError::NegativePrice`] if `price` is below zero and
    /// [`AnalyticsError::PriceTooLarge`] if it exceeds [`MAX_UNIT_PRICE`].
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Result<Self, AnalyticsError> {
        let name = name.into();
        if price < Decimal::ZERO {
            return Err(AnalyticsError::NegativePrice {
                product: name,
                price,
            });
        }
        if price > MAX_UNIT_PRICE {
            return Err(AnalyticsError::PriceTooLarge {
                product: name,
                price,
            });
        }
        Ok(Self {
            id: id.into(),
            name,
            price,
            category: category.into(),
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns a copy of this product with a different price.
    ///
    /// # Errors
    /// Same as [`Product::new`].
    pub fn with_price(&self, price: Decimal) -> Result<Self, AnalyticsError> {
        Self::new(self.id, self.name.clone(), price, self.category.clone())
    }
}

/// Wire shape of a [`Product`], validated on conversion.
#[derive(Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    price: Decimal,
    category: String,
}

impl TryFrom<ProductRecord> for Product {
    type Error = AnalyticsError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(record.id, record.name, record.price, record.category)
    }
}

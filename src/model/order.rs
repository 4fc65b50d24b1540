use crate::error::AnalyticsError;
use crate::model::{Product, User};
use pipeline_framework::Record;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "completed" => Ok(OrderStatus::Completed),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(AnalyticsError::UnknownStatus(s.to_string())),
        }
    }
}

/// One line of an order: a product and how many units of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrderItemRecord")]
pub struct OrderItem {
    product: Product,
    quantity: u32,
}

impl OrderItem {
    /// # Errors
    /// Returns [`AnalyticsError::InvalidQuantity`] if `quantity` is zero.
    pub fn new(product: Product, quantity: u32) -> Result<Self, AnalyticsError> {
        if quantity == 0 {
            return Err(AnalyticsError::InvalidQuantity {
                product: product.name().to_string(),
                quantity,
            });
        }
        Ok(Self { product, quantity })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price × quantity` for this line.
    pub fn line_total(&self) -> Decimal {
        self.product.price() * Decimal::from(self.quantity)
    }

    /// Returns a copy of this line with its product replaced, keeping the quantity.
    pub fn with_product(&self, product: Product) -> Self {
        Self {
            product,
            quantity: self.quantity,
        }
    }
}

/// Wire shape of an [`OrderItem`], validated on conversion.
#[derive(Deserialize)]
struct OrderItemRecord {
    product: Product,
    quantity: u32,
}

impl TryFrom<OrderItemRecord> for OrderItem {
    type Error = AnalyticsError;

    fn try_from(record: OrderItemRecord) -> Result<Self, Self::Error> {
        OrderItem::new(record.product, record.quantity)
    }
}

/// Represents a customer order.
///
/// The item list is fixed at construction. Anything that "changes" an order (a
/// discount, for instance) builds a new `Order` and leaves this one as it was.
///
/// The order total is never stored: [`Order::total`] recomputes it from the items
/// on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    user: User,
    items: Vec<OrderItem>,
    status: OrderStatus,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `user` - The user who placed the order
    /// * `items` - Order lines, in display order
    /// * `status` - Current lifecycle status
    pub fn new(
        id: impl Into<OrderId>,
        user: User,
        items: Vec<OrderItem>,
        status: OrderStatus,
    ) -> Self {
        Self {
            id: id.into(),
            user,
            items,
            status,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Sum of `price × quantity` over all items. An order with no items totals zero.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Returns a copy of this order with a different item list.
    pub fn with_items(&self, items: Vec<OrderItem>) -> Self {
        Self {
            id: self.id,
            user: self.user.clone(),
            items,
            status: self.status,
        }
    }

    /// Returns `true` if any item's product belongs to `category`.
    pub fn has_category(&self, category: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.product().category() == category)
    }
}

impl Record for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}

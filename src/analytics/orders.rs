//! Per-order operations: totals, filtering, ranking, discounts and category search.

use crate::error::AnalyticsError;
use crate::model::{Order, OrderStatus};
use pipeline_framework::{top_n_by, Pipeline};
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

/// Sum of `price × quantity` over the order's items. Zero for an order with no items.
pub fn order_total(order: &Order) -> Decimal {
    order.total()
}

/// Orders whose status is `status`, in input order.
pub fn filter_by_status(orders: &[Order], status: OrderStatus) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.status() == status)
        .cloned()
        .collect()
}

/// The `n` most expensive orders, most expensive first.
///
/// Orders with equal totals keep their input order. `n == 0` yields nothing and `n`
/// larger than the input yields every order.
pub fn top_expensive(orders: &[Order], n: usize) -> Vec<Order> {
    top_n_by(orders, n, order_total)
}

/// Returns a new order with every item's price multiplied by `1 - rate`.
///
/// The input order is left unchanged.
///
/// # Errors
/// Returns [`AnalyticsError::InvalidDiscountRate`] unless `0 <= rate < 1`.
pub fn apply_discount(order: &Order, rate: Decimal) -> Result<Order, AnalyticsError> {
    if rate < Decimal::ZERO || rate >= Decimal::ONE {
        warn!(order_id = %order.id(), %rate, "Discount rate rejected");
        return Err(AnalyticsError::InvalidDiscountRate(rate));
    }

    let factor = Decimal::ONE - rate;
    let items = order
        .items()
        .iter()
        .map(|item| {
            let product = item.product();
            Ok(item.with_product(product.with_price(product.price() * factor)?))
        })
        .collect::<Result<Vec<_>, AnalyticsError>>()?;

    Ok(order.with_items(items))
}

/// Orders with at least one item in `category`, in input order.
pub fn find_by_category(orders: &[Order], category: &str) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.has_category(category))
        .cloned()
        .collect()
}

/// Sum of the totals of all orders in `status`.
pub fn revenue_by_status(orders: &[Order], status: OrderStatus) -> Decimal {
    orders
        .iter()
        .filter(|order| order.status() == status)
        .map(order_total)
        .sum()
}

/// Filter → threshold → discount → rank, as one composed pipeline.
///
/// Keeps the orders in `status` whose (undiscounted) total is strictly above
/// `min_total`, discounts each by `rate`, and returns the `n` most expensive of the
/// discounted orders.
///
/// # Errors
/// Returns [`AnalyticsError::InvalidDiscountRate`] unless `0 <= rate < 1`.
#[instrument(skip(orders), fields(order_count = orders.len()))]
pub fn top_discounted(
    orders: &[Order],
    status: OrderStatus,
    min_total: Decimal,
    rate: Decimal,
    n: usize,
) -> Result<Vec<Order>, AnalyticsError> {
    let pipeline = Pipeline::new()
        .pipe(move |batch: Result<Vec<Order>, AnalyticsError>| {
            batch.map(|orders| filter_by_status(&orders, status))
        })
        .pipe(move |batch| {
            batch.map(|orders| {
                orders
                    .into_iter()
                    .filter(|order| order.total() > min_total)
                    .collect()
            })
        })
        .pipe(move |batch| {
            batch.and_then(|orders| {
                orders
                    .iter()
                    .map(|order| apply_discount(order, rate))
                    .collect()
            })
        })
        .pipe(move |batch| batch.map(|orders| top_expensive(&orders, n)));

    let result = pipeline.run(Ok(orders.to_vec()))?;
    debug!(selected = result.len(), "Discounted ranking complete");
    Ok(result)
}

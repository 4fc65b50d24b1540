//! Summary statistics over a batch of orders.

use crate::model::{Order, OrderStatus};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Aggregate figures for a non-empty batch of orders.
///
/// Revenue, average, max and min are computed over *all* orders in the batch,
/// regardless of status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderStats {
    pub total_orders: usize,
    pub completed_orders: usize,
    pub pending_orders: usize,
    pub total_revenue: Decimal,
    pub average_order: Decimal,
    pub max_order: Decimal,
    pub min_order: Decimal,
}

/// Computes [`OrderStats`] for `orders`.
///
/// Returns `None` for an empty slice: there is no average, maximum or minimum of
/// nothing.
pub fn statistics(orders: &[Order]) -> Option<OrderStats> {
    let totals: Vec<Decimal> = orders.iter().map(Order::total).collect();

    let max_order = totals.iter().copied().max()?;
    let min_order = totals.iter().copied().min()?;
    let total_revenue: Decimal = totals.iter().sum();
    let count_status =
        |status: OrderStatus| orders.iter().filter(|order| order.status() == status).count();

    let stats = OrderStats {
        total_orders: orders.len(),
        completed_orders: count_status(OrderStatus::Completed),
        pending_orders: count_status(OrderStatus::Pending),
        total_revenue,
        average_order: total_revenue / Decimal::from(totals.len()),
        max_order,
        min_order,
    };
    debug!(?stats, "Statistics computed");
    Some(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderItem, Product, User, MAX_UNIT_PRICE};
    use crate::seed::seed_data;
    use rust_decimal_macros::dec;

    #[test]
    fn test_statistics_on_seed_orders() {
        let data = seed_data().unwrap();
        let stats = statistics(&data.orders).unwrap();

        assert_eq!(stats.total_orders, 4);
        assert_eq!(stats.completed_orders, 2);
        assert_eq!(stats.pending_orders, 2);
        assert_eq!(stats.total_revenue, dec!(3409.87));
        assert_eq!(stats.average_order, dec!(852.4675));
        assert_eq!(stats.max_order, dec!(1999.99));
        assert_eq!(stats.min_order, dec!(109.94));
    }

    #[test]
    fn test_statistics_on_empty_input() {
        assert_eq!(statistics(&[]), None);
    }

    #[test]
    fn test_single_order() {
        let data = seed_data().unwrap();
        let stats = statistics(&data.orders[1..2]).unwrap();
        assert_eq!(stats.max_order, stats.min_order);
        assert_eq!(stats.average_order, dec!(1999.99));
        assert_eq!(stats.completed_orders, 0);
    }

    #[test]
    fn test_largest_accepted_lines_do_not_overflow() {
        let yacht = Product::new(1, "Yacht", MAX_UNIT_PRICE, "boats").unwrap();
        let buyer = User::new(1, "Ann", "ann@example.com");
        let line = OrderItem::new(yacht, u32::MAX).unwrap();

        let orders: Vec<Order> = (1..=3)
            .map(|id| Order::new(id, buyer.clone(), vec![line.clone(); 5], OrderStatus::Completed))
            .collect();

        let per_order = MAX_UNIT_PRICE * Decimal::from(u32::MAX) * Decimal::from(5);
        let stats = statistics(&orders).unwrap();
        assert_eq!(stats.max_order, per_order);
        assert_eq!(stats.total_revenue, per_order * Decimal::from(3));
        assert_eq!(stats.average_order, per_order);
    }
}

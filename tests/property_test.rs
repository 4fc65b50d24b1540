//! Property-based tests for the order analytics operations.
//!
//! These check invariants that should hold for any batch of orders, not just the
//! seed dataset.

use order_analytics::analytics::{
    apply_discount, filter_by_status, find_by_category, group_by_user, order_total,
    spending_by_user, statistics, top_expensive,
};
use order_analytics::model::{Order, OrderItem, OrderStatus, Product, User};
use order_analytics::search::CategorySearch;
use proptest::collection::vec;
use proptest::prelude::*;
use rust_decimal::Decimal;

const CATEGORIES: [&str; 3] = ["electronics", "clothing", "books"];
const STATUSES: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Processing,
    OrderStatus::Completed,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];

// (price in cents, quantity, category index)
type LineSpec = (i64, u32, usize);
// (user index, status index, lines)
type OrderSpec = (u32, usize, Vec<LineSpec>);

fn build_orders(specs: Vec<OrderSpec>) -> Vec<Order> {
    specs
        .into_iter()
        .enumerate()
        .map(|(index, (user, status, lines))| {
            let user = User::new(user, format!("user {user}"), format!("user{user}@example.com"));
            let items = lines
                .into_iter()
                .enumerate()
                .map(|(line, (cents, quantity, category))| {
                    let product = Product::new(
                        line as u32,
                        format!("product {line}"),
                        Decimal::new(cents, 2),
                        CATEGORIES[category],
                    )
                    .unwrap();
                    OrderItem::new(product, quantity).unwrap()
                })
                .collect();
            Order::new(index as u32 + 1, user, items, STATUSES[status])
        })
        .collect()
}

fn arb_orders() -> impl Strategy<Value = Vec<Order>> {
    let line = (0i64..200_000, 1u32..10, 0usize..CATEGORIES.len());
    let order = (0u32..4, 0usize..STATUSES.len(), vec(line, 0..5));
    vec(order, 0..25).prop_map(build_orders)
}

fn ids(orders: &[Order]) -> Vec<u32> {
    orders.iter().map(|o| o.id().0).collect()
}

proptest! {
    #[test]
    fn prop_total_is_sum_of_lines(orders in arb_orders()) {
        for order in &orders {
            let expected: Decimal = order
                .items()
                .iter()
                .map(|item| item.product().price() * Decimal::from(item.quantity()))
                .sum();
            prop_assert_eq!(order_total(order), expected);
        }
    }

    #[test]
    fn prop_filter_by_status_is_idempotent(orders in arb_orders(), status in 0usize..STATUSES.len()) {
        let status = STATUSES[status];
        let once = filter_by_status(&orders, status);
        let twice = filter_by_status(&once, status);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.iter().all(|o| o.status() == status));
    }

    #[test]
    fn prop_top_expensive_sorted_stable_and_sized(orders in arb_orders(), n in 0usize..30) {
        let top = top_expensive(&orders, n);
        prop_assert_eq!(top.len(), n.min(orders.len()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].total() >= pair[1].total());
            // ids follow input order, so equal totals must keep ascending ids
            if pair[0].total() == pair[1].total() {
                prop_assert!(pair[0].id() < pair[1].id());
            }
        }
    }

    #[test]
    fn prop_zero_discount_is_identity_on_totals(orders in arb_orders()) {
        for order in &orders {
            let same = apply_discount(order, Decimal::ZERO).unwrap();
            prop_assert_eq!(same.total(), order.total());
        }
    }

    #[test]
    fn prop_group_by_user_partitions(orders in arb_orders()) {
        let grouped = group_by_user(&orders);
        prop_assert_eq!(grouped.values_len(), orders.len());

        for (user_id, group) in grouped.iter() {
            prop_assert!(group.iter().all(|o| o.user().id == *user_id));
        }

        let mut regrouped: Vec<u32> = grouped
            .into_iter()
            .flat_map(|(_, group)| ids(&group))
            .collect();
        regrouped.sort_unstable();
        prop_assert_eq!(regrouped, ids(&orders));
    }

    #[test]
    fn prop_spending_matches_revenue(orders in arb_orders()) {
        let spending = spending_by_user(&orders);
        prop_assert!(spending.windows(2).all(|w| w[0].total_spent >= w[1].total_spent));

        let spent: Decimal = spending.iter().map(|s| s.total_spent).sum();
        match statistics(&orders) {
            Some(stats) => {
                prop_assert_eq!(spent, stats.total_revenue);
                prop_assert!(stats.min_order <= stats.average_order);
                prop_assert!(stats.average_order <= stats.max_order);
            }
            None => prop_assert!(orders.is_empty()),
        }
    }

    #[test]
    fn prop_cached_search_matches_scan(orders in arb_orders(), picks in vec(0usize..CATEGORIES.len(), 1..8)) {
        let mut search = CategorySearch::new(&orders);
        for pick in picks {
            let category = CATEGORIES[pick];
            prop_assert_eq!(search.find(category), find_by_category(&orders, category));
        }
    }
}

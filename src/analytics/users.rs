//! Per-user aggregation.

use crate::model::{Order, OrderStatus, UserId};
use pipeline_framework::{group_by, OrderedGroups};
use rust_decimal::Decimal;
use serde::Serialize;

/// Total amount a user has spent across a set of orders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSpending {
    pub user_name: String,
    pub total_spent: Decimal,
}

/// Spending and order count for one user within a single status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub user_id: UserId,
    pub user_name: String,
    pub total_spent: Decimal,
    pub order_count: usize,
}

/// Groups orders by user id. Users appear in the order of their first order, and each
/// user's orders keep their input order.
pub fn group_by_user(orders: &[Order]) -> OrderedGroups<UserId, Order> {
    group_by(orders.iter().cloned(), |order| order.user().id)
}

/// Total spent per user name, highest first.
///
/// Users with equal totals are ordered by name, ascending.
pub fn spending_by_user(orders: &[Order]) -> Vec<UserSpending> {
    let by_name = group_by(orders.iter(), |order| order.user().name.clone());

    let mut spending: Vec<UserSpending> = by_name
        .into_iter()
        .map(|(user_name, orders)| UserSpending {
            user_name,
            total_spent: orders.iter().map(|order| order.total()).sum(),
        })
        .collect();

    spending.sort_by(|a, b| {
        b.total_spent
            .cmp(&a.total_spent)
            .then_with(|| a.user_name.cmp(&b.user_name))
    });
    spending
}

/// Per-user spending and order count, counting only orders in `status`.
///
/// Users appear in the order of their first matching order; users without a matching
/// order are left out.
pub fn user_summaries(orders: &[Order], status: OrderStatus) -> Vec<UserSummary> {
    let matching = orders.iter().filter(|order| order.status() == status);

    group_by(matching, |order| (order.user().id, order.user().name.clone()))
        .into_iter()
        .map(|((user_id, user_name), orders)| UserSummary {
            user_id,
            user_name,
            total_spent: orders.iter().map(|order| order.total()).sum(),
            order_count: orders.len(),
        })
        .collect()
}

//! # Order Analytics Demo
//!
//! Builds the seed dataset and runs every report over it, logging results through
//! `tracing`. Report parameters come from the JSON file named by
//! `ORDER_ANALYTICS_CONFIG`, or the defaults when it is unset:
//!
//! 1. Completed orders and their revenue
//! 2. Top-N most expensive orders
//! 3. Discount preview on the first order
//! 4. Orders per user and spending per user
//! 5. Category search (memoized)
//! 6. Summary statistics
//! 7. The composed filter → discount → rank pipeline

use order_analytics::analytics::{
    apply_discount, filter_by_status, group_by_user, group_products_by_category,
    revenue_by_status, spending_by_user, statistics, top_discounted, top_expensive,
    user_summaries,
};
use order_analytics::config::AnalyticsConfig;
use order_analytics::error::AnalyticsError;
use order_analytics::search::CategorySearch;
use order_analytics::seed::seed_data;
use pipeline_framework::tracing::setup_tracing;
use tracing::{error, info, info_span, warn};

fn main() -> Result<(), AnalyticsError> {
    setup_tracing();

    let config = AnalyticsConfig::from_env().inspect_err(|e| {
        error!(error = %e, "Config could not be loaded");
    })?;
    if let Err(e) = run(&config) {
        error!(error = %e, "Report run failed");
        return Err(e);
    }

    info!("All reports completed");
    Ok(())
}

fn run(config: &AnalyticsConfig) -> Result<(), AnalyticsError> {
    config.validate()?;
    let data = seed_data()?;
    info!(
        users = data.users.len(),
        products = data.products.len(),
        orders = data.orders.len(),
        "Seed data loaded"
    );

    {
        let _span = info_span!("catalogue").entered();
        for (category, products) in group_products_by_category(&data.products).iter() {
            info!(%category, products = products.len(), "Category");
        }
    }

    {
        let _span = info_span!("status_revenue", status = %config.revenue_status).entered();
        for order in filter_by_status(&data.orders, config.revenue_status) {
            info!(order_id = %order.id(), user = %order.user().name, total = %order.total(), "Order");
        }
        let revenue = revenue_by_status(&data.orders, config.revenue_status);
        info!(revenue = %revenue.round_dp(2), "Revenue");
    }

    {
        let _span = info_span!("top_expensive", n = config.top_n).entered();
        for order in top_expensive(&data.orders, config.top_n) {
            info!(order_id = %order.id(), total = %order.total(), "Ranked");
        }
    }

    if let Some(first) = data.orders.first() {
        let _span = info_span!("discount", rate = %config.discount_rate).entered();
        let discounted = apply_discount(first, config.discount_rate)?;
        info!(
            order_id = %first.id(),
            before = %first.total().round_dp(2),
            after = %discounted.total().round_dp(2),
            "Discount applied"
        );
    }

    {
        let _span = info_span!("users").entered();
        for (user_id, orders) in group_by_user(&data.orders).iter() {
            let name = data
                .users
                .iter()
                .find(|user| user.id == *user_id)
                .map(|user| user.name.as_str())
                .unwrap_or("Unknown");
            info!(%user_id, user = name, orders = orders.len(), "Orders per user");
        }
        for spending in spending_by_user(&data.orders) {
            info!(user = %spending.user_name, spent = %spending.total_spent.round_dp(2), "Spending");
        }
        for summary in user_summaries(&data.orders, config.revenue_status) {
            info!(
                user_id = %summary.user_id,
                spent = %summary.total_spent.round_dp(2),
                orders = summary.order_count,
                "Summary"
            );
        }
    }

    {
        let _span = info_span!("category_search", category = %config.highlight_category).entered();
        let mut search = CategorySearch::new(&data.orders);
        let found = search.find(&config.highlight_category);
        info!(found = found.len(), "Orders found");
        for order in &found {
            info!(order_id = %order.id(), total = %order.total(), "Match");
        }
        // served from cache
        let again = search.find(&config.highlight_category);
        info!(found = again.len(), hits = search.hits(), misses = search.misses(), "Repeat search");
    }

    {
        let _span = info_span!("statistics").entered();
        match statistics(&data.orders) {
            Some(stats) => info!(
                total_orders = stats.total_orders,
                completed = stats.completed_orders,
                pending = stats.pending_orders,
                revenue = %stats.total_revenue.round_dp(2),
                average = %stats.average_order.round_dp(2),
                max = %stats.max_order.round_dp(2),
                min = %stats.min_order.round_dp(2),
                "Statistics"
            ),
            None => warn!("No orders, statistics skipped"),
        }
    }

    {
        let _span = info_span!("pipeline").entered();
        let top = top_discounted(
            &data.orders,
            config.revenue_status,
            config.chain_min_total,
            config.chain_discount_rate,
            1,
        )?;
        match top.first() {
            Some(order) => info!(order_id = %order.id(), total = %order.total().round_dp(2), "Best discounted order"),
            None => info!("No order passed the pipeline"),
        }
    }

    Ok(())
}

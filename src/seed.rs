//! The static demo dataset: three users, five products and four orders.

use crate::error::AnalyticsError;
use crate::model::{Order, OrderItem, OrderStatus, Product, User};
use rust_decimal_macros::dec;

/// Everything the demo works on. Built once; analytics never modify it.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

/// Builds the seed dataset.
///
/// Order totals: `order_1` 1059.97 (completed), `order_2` 1999.99 (pending),
/// `order_3` 239.97 (completed), `order_4` 109.94 (pending).
pub fn seed_data() -> Result<SeedData, AnalyticsError> {
    let users = vec![
        User::new(1, "John Doe", "john@example.com"),
        User::new(2, "Jane Smith", "jane@example.com"),
        User::new(3, "Bob Johnson", "bob@example.com"),
    ];

    let products = vec![
        Product::new(1, "iPhone", dec!(999.99), "electronics")?,
        Product::new(2, "MacBook", dec!(1999.99), "electronics")?,
        Product::new(3, "T-shirt", dec!(29.99), "clothing")?,
        Product::new(4, "Jeans", dec!(79.99), "clothing")?,
        Product::new(5, "Book", dec!(15.99), "books")?,
    ];

    let item = |index: usize, quantity: u32| OrderItem::new(products[index].clone(), quantity);

    let orders = vec![
        Order::new(
            1,
            users[0].clone(),
            vec![item(0, 1)?, item(2, 2)?],
            OrderStatus::Completed,
        ),
        Order::new(2, users[1].clone(), vec![item(1, 1)?], OrderStatus::Pending),
        Order::new(3, users[0].clone(), vec![item(3, 3)?], OrderStatus::Completed),
        Order::new(
            4,
            users[2].clone(),
            vec![item(4, 5)?, item(2, 1)?],
            OrderStatus::Pending,
        ),
    ];

    Ok(SeedData {
        users,
        products,
        orders,
    })
}

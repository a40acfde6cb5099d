use chrono::{Duration, NaiveDate};

use crate::domain::entities::order::{Order, OrderId, OrderStatus};

const STATUSES: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Processing,
    OrderStatus::Delivered,
    OrderStatus::Shipped,
    OrderStatus::Failed,
];
const PRICES: [f64; 5] = [799.0, 999.0, 1299.0, 1499.0, 1999.0];

/// `count` deterministic orders with ids `order-1000..`.
pub fn sample_orders(count: usize) -> Vec<Order> {
    let base = NaiveDate::from_ymd_opt(2024, 3, 1).expect("fixture date should be valid");
    (0..count)
        .map(|index| {
            let (product, category) = match index % 3 {
                0 => ("Apple iPad Pro", "Tablets"),
                1 => ("MacBook Air", "Laptops"),
                _ => ("iPhone 15 Pro", "Smartphones"),
            };
            Order {
                id: OrderId(format!("order-{}", 1000 + index)),
                quantity: (index % 5) as u32 + 1,
                product: product.to_string(),
                company: "Apple".to_string(),
                category: category.to_string(),
                image_url: "https://example.com/product.png".to_string(),
                customer: format!("Customer-{}", 1000 + index),
                status: STATUSES[index % 5],
                price: PRICES[(index * 3) % 5],
                order_date: base - Duration::days(((index * 7) % 30) as i64),
            }
        })
        .collect()
}

pub fn ids<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Vec<String> {
    orders.into_iter().map(|order| order.id.0.clone()).collect()
}

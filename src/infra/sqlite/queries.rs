use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::params;

use crate::domain::entities::order::{Order, OrderId, OrderStatus};
use crate::infra::sqlite::schema::{init_db, open_connection};

/// Raw column values as stored, before validation.
struct OrderRow {
    id: String,
    quantity: i64,
    product: String,
    company: String,
    category: String,
    image_url: String,
    customer: String,
    status: String,
    price: f64,
    order_date: String,
}

impl OrderRow {
    fn into_order(self) -> Result<Order> {
        let status = self
            .status
            .parse::<OrderStatus>()
            .with_context(|| format!("invalid status for {}", self.id))?;
        let order_date = NaiveDate::parse_from_str(&self.order_date, "%Y-%m-%d")
            .with_context(|| format!("invalid order date for {}: {}", self.id, self.order_date))?;
        let quantity = u32::try_from(self.quantity)
            .with_context(|| format!("invalid quantity for {}: {}", self.id, self.quantity))?;

        Ok(Order {
            id: OrderId(self.id),
            quantity,
            product: self.product,
            company: self.company,
            category: self.category,
            image_url: self.image_url,
            customer: self.customer,
            status,
            price: self.price,
            order_date,
        })
    }
}

/// Inserts or replaces orders by id. Returns the number written.
pub fn upsert_orders(db_path: &Path, orders: &[Order]) -> Result<usize> {
    init_db(db_path)?;
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start order insert transaction")?;

    let mut insert_order = tx
        .prepare(
            "INSERT INTO orders(id, quantity, product, company, category, image_url,
                                customer, status, price, order_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
             ON CONFLICT(id) DO UPDATE SET
                quantity = excluded.quantity,
                product = excluded.product,
                company = excluded.company,
                category = excluded.category,
                image_url = excluded.image_url,
                customer = excluded.customer,
                status = excluded.status,
                price = excluded.price,
                order_date = excluded.order_date",
        )
        .context("failed to prepare order insert")?;

    for order in orders {
        insert_order
            .execute(params![
                order.id.0,
                i64::from(order.quantity),
                order.product,
                order.company,
                order.category,
                order.image_url,
                order.customer,
                order.status.as_str(),
                order.price,
                order.order_date.format("%Y-%m-%d").to_string(),
            ])
            .with_context(|| format!("failed to insert order {}", order.id))?;
    }
    drop(insert_order);

    tx.commit().context("failed to commit order insert")?;
    Ok(orders.len())
}

/// All orders in insertion order.
pub fn load_orders(db_path: &Path) -> Result<Vec<Order>> {
    init_db(db_path)?;
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT id, quantity, product, company, category, image_url,
                    customer, status, price, order_date
             FROM orders
             ORDER BY seq ASC",
        )
        .context("failed to prepare orders query")?;

    let rows = stmt
        .query_map([], |row| {
            Ok(OrderRow {
                id: row.get(0)?,
                quantity: row.get(1)?,
                product: row.get(2)?,
                company: row.get(3)?,
                category: row.get(4)?,
                image_url: row.get(5)?,
                customer: row.get(6)?,
                status: row.get(7)?,
                price: row.get(8)?,
                order_date: row.get(9)?,
            })
        })
        .context("failed to query orders")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to collect orders")?;

    rows.into_iter().map(OrderRow::into_order).collect()
}

pub fn count_orders(db_path: &Path) -> Result<i64> {
    let conn = open_connection(db_path)?;
    conn.query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))
        .context("failed to count orders")
}

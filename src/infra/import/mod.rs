pub mod csv;
pub mod xlsx;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Days, NaiveDate};

use crate::domain::entities::order::{Order, OrderId, OrderStatus};

const REQUIRED_FIELDS: [&str; 10] = [
    "id",
    "quantity",
    "product",
    "company",
    "category",
    "imageurl",
    "customer",
    "status",
    "price",
    "orderdate",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

// Serial of 9999-12-31, the last date Excel can hold.
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

fn normalize_header(header: &str) -> String {
    header
        .trim()
        .chars()
        .filter(|c| *c != '_' && *c != ' ')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Column positions of each order field in a header row.
///
/// Headers match case-insensitively, ignoring spaces and underscores, so
/// `orderDate`, `order_date` and `Order Date` are the same field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLayout {
    positions: [usize; 10],
}

impl OrderLayout {
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|header| normalize_header(header.as_ref()))
            .collect();
        let mut positions = [0_usize; 10];
        for (slot, field) in positions.iter_mut().zip(REQUIRED_FIELDS) {
            *slot = normalized
                .iter()
                .position(|header| header == field)
                .ok_or_else(|| anyhow!("missing column: {field}"))?;
        }
        Ok(Self { positions })
    }

    pub fn parse_row<S: AsRef<str>>(&self, row: &[S]) -> Result<Order> {
        let field = |slot: usize| -> &str {
            row.get(self.positions[slot])
                .map(|value| value.as_ref().trim())
                .unwrap_or("")
        };

        let id = field(0);
        if id.is_empty() {
            bail!("order id is required")
        }

        Ok(Order {
            id: OrderId::from(id),
            quantity: parse_quantity(field(1))
                .with_context(|| format!("invalid quantity for {id}: {:?}", field(1)))?,
            product: field(2).to_string(),
            company: field(3).to_string(),
            category: field(4).to_string(),
            image_url: field(5).to_string(),
            customer: field(6).to_string(),
            status: field(7)
                .parse::<OrderStatus>()
                .with_context(|| format!("invalid status for {id}"))?,
            price: parse_price(field(8))
                .with_context(|| format!("invalid price for {id}: {:?}", field(8)))?,
            order_date: parse_date(field(9))
                .with_context(|| format!("invalid order date for {id}: {:?}", field(9)))?,
        })
    }
}

/// Spreadsheets hand whole numbers back as `3` or `3.0`; both are accepted.
fn parse_quantity(value: &str) -> Result<u32> {
    let number = value.parse::<f64>()?;
    if number.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&number) {
        bail!("quantity must be a whole number between 0 and {}", u32::MAX)
    }
    Ok(number as u32)
}

fn parse_price(value: &str) -> Result<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    Ok(cleaned.trim().parse::<f64>()?)
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    // Excel stores dates as day serials counted from 1899-12-30.
    if let Ok(serial) = value.parse::<f64>() {
        if !(0.0..=MAX_EXCEL_SERIAL).contains(&serial) {
            bail!("date serial out of range")
        }
        let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).context("invalid excel epoch")?;
        return epoch
            .checked_add_days(Days::new(serial.trunc() as u64))
            .ok_or_else(|| anyhow!("date serial out of range"));
    }

    // Spreadsheet cells may carry a time part.
    let date_part = value.split(['T', ' ']).next().unwrap_or(value);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
        .ok_or_else(|| anyhow!("unrecognized date"))
}

/// Parses every row after the header.
pub fn orders_from_rows<S: AsRef<str>>(headers: &[S], rows: &[Vec<S>]) -> Result<Vec<Order>> {
    let layout = OrderLayout::from_headers(headers)?;
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.iter().any(|cell| !cell.as_ref().trim().is_empty()))
        .map(|(row_idx, row)| {
            layout
                .parse_row(row)
                .with_context(|| format!("failed to parse row {}", row_idx + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: [&str; 10] = [
        "id",
        "quantity",
        "product",
        "company",
        "category",
        "imageUrl",
        "customer",
        "status",
        "price",
        "order_date",
    ];

    fn row(values: [&str; 10]) -> Vec<&str> {
        values.to_vec()
    }

    #[test]
    fn parses_row_with_formatted_price() {
        let rows = vec![row([
            "order-1000",
            "2",
            "MacBook Air",
            "Apple",
            "Laptops",
            "img.png",
            "Customer-1000",
            "Shipped",
            "$1,299.00",
            "2024-02-29",
        ])];

        let orders = orders_from_rows(&HEADERS, &rows).expect("row should parse");

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Shipped);
        assert_eq!(orders[0].price, 1299.0);
        assert_eq!(
            orders[0].order_date,
            NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date")
        );
    }

    #[test]
    fn excel_serial_dates_are_converted() {
        let date = parse_date("45352").expect("serial should parse");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"));
    }

    #[test]
    fn out_of_range_serial_dates_are_errors() {
        for value in ["1e300", "inf", "NaN", "-1", "2958466"] {
            let err = parse_date(value).expect_err("serial should be rejected");
            assert!(err.to_string().contains("out of range"), "{value}: {err}");
        }
        let last = parse_date("2958465").expect("last excel date should parse");
        assert_eq!(last, NaiveDate::from_ymd_opt(9999, 12, 31).expect("valid date"));
    }

    #[test]
    fn quantity_must_be_a_whole_non_negative_number() {
        let order_with = |quantity: &'static str| {
            row([
                "order-1", quantity, "p", "c", "k", "i", "u", "pending", "10", "2024-01-01",
            ])
        };

        for quantity in ["-3", "2.5", "1e12", "NaN"] {
            let err = orders_from_rows(&HEADERS, &[order_with(quantity)])
                .expect_err("quantity should be rejected");
            assert!(format!("{err:#}").contains("invalid quantity"), "{quantity}: {err:#}");
        }

        let orders = orders_from_rows(&HEADERS, &[order_with("3.0")]).expect("3.0 should parse");
        assert_eq!(orders[0].quantity, 3);
    }

    #[test]
    fn missing_header_is_reported() {
        let err = OrderLayout::from_headers(&["id", "product"]).expect_err("layout should fail");
        assert!(err.to_string().contains("missing column"), "{err}");
    }

    #[test]
    fn blank_rows_are_skipped_and_bad_status_fails() {
        let blank = row(["", "", "", "", "", "", "", "", "", ""]);
        let bad = row([
            "order-1", "1", "p", "c", "k", "i", "u", "lost", "10", "2024-01-01",
        ]);

        let skipped = orders_from_rows(&HEADERS, &[blank]).expect("blank row should be skipped");
        assert!(skipped.is_empty());

        let err = orders_from_rows(&HEADERS, &[bad]).expect_err("bad status should fail");
        assert!(format!("{err:#}").contains("invalid status"), "{err:#}");
    }
}

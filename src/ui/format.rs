//! Cell text for renderers. The engine never calls into this module.

use crate::domain::columns::{CellValue, ColumnDescriptor};

pub trait ValueFormatter {
    fn format(&self, column: &str, value: &CellValue<'_>) -> String;
}

/// US English: prices as dollars, dates as `Mar 1, 2024`, statuses by label.
#[derive(Debug, Clone, Default)]
pub struct DefaultFormatter {
    /// Columns rendered as currency.
    pub currency_columns: Vec<&'static str>,
}

impl DefaultFormatter {
    pub fn for_orders() -> Self {
        Self {
            currency_columns: vec!["price"],
        }
    }
}

impl ValueFormatter for DefaultFormatter {
    fn format(&self, column: &str, value: &CellValue<'_>) -> String {
        match value {
            CellValue::Text(text) => (*text).to_string(),
            CellValue::Number(number) if self.currency_columns.iter().any(|c| *c == column) => {
                format_usd(*number)
            }
            CellValue::Number(number) => number.to_string(),
            CellValue::Date(date) => date.format("%b %-d, %Y").to_string(),
            CellValue::Enum { label, .. } => (*label).to_string(),
        }
    }
}

pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

pub fn format_cell<R>(
    formatter: &dyn ValueFormatter,
    column: &ColumnDescriptor<R>,
    record: &R,
) -> String {
    formatter.format(column.key, &column.value(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn usd_groups_thousands() {
        assert_eq!(format_usd(799.0), "$799.00");
        assert_eq!(format_usd(1299.0), "$1,299.00");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(-5.5), "-$5.50");
    }

    #[test]
    fn dates_use_short_month() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        let formatter = DefaultFormatter::for_orders();
        assert_eq!(formatter.format("orderDate", &CellValue::Date(date)), "Mar 1, 2024");
    }

    #[test]
    fn only_currency_columns_get_dollars() {
        let formatter = DefaultFormatter::for_orders();
        assert_eq!(formatter.format("price", &CellValue::Number(999.0)), "$999.00");
        assert_eq!(formatter.format("quantity", &CellValue::Number(3.0)), "3");
    }
}

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::entities::order::Order;
use crate::infra::import::OrderLayout;
use crate::usecase::ports::source::{OrderSource, SourceError};

pub fn read_orders_csv<R: Read>(reader: R) -> Result<Vec<Order>> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader
        .headers()
        .context("failed to read csv headers")?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let header_names: Vec<&str> = headers.iter().collect();
    let layout = OrderLayout::from_headers(&header_names)?;

    let mut orders = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.context("failed to parse csv record")?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let cells: Vec<&str> = record.iter().collect();
        let order = layout
            .parse_row(&cells)
            .with_context(|| format!("failed to parse csv row {}", row_idx + 1))?;
        orders.push(order);
    }

    Ok(orders)
}

pub fn import_orders_csv(csv_path: &Path) -> Result<Vec<Order>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    read_orders_csv(file).with_context(|| format!("failed to import csv: {}", csv_path.display()))
}

pub struct CsvOrderSource {
    pub path: PathBuf,
}

impl OrderSource for CsvOrderSource {
    fn load_orders(&self) -> Result<Vec<Order>, SourceError> {
        Ok(import_orders_csv(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::order::OrderStatus;

    const FIXTURE: &str = "\
id,quantity,product,company,category,imageUrl,customer,status,price,orderDate
order-1000,1,Apple iPad Pro,Apple,Tablets,a.png,Customer-1000,pending,799,2024-03-01
order-1001,2,MacBook Air,Apple,Laptops,b.png,Customer-1001,processing,999,2024-02-23
,,,,,,,,,
";

    #[test]
    fn reads_orders_and_skips_blank_lines() {
        let orders = read_orders_csv(FIXTURE.as_bytes()).expect("csv should parse");
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[1].id.0, "order-1001");
        assert_eq!(orders[1].status, OrderStatus::Processing);
        assert_eq!(orders[1].quantity, 2);
    }

    #[test]
    fn missing_file_reports_path() {
        let source = CsvOrderSource {
            path: PathBuf::from("/definitely/missing/orders.csv"),
        };
        let err = source.load_orders().expect_err("missing file should fail");
        assert!(err.to_string().contains("orders.csv"), "{err}");
    }
}

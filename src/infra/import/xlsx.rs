use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::entities::order::Order;
use crate::infra::import::orders_from_rows;
use crate::usecase::ports::source::{OrderSource, SourceError};

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Reads orders from `sheet`, or from the first sheet when `None`.
/// The first row of the sheet is the header.
pub fn import_orders_xlsx(xlsx_path: &Path, sheet: Option<&str>) -> Result<Vec<Order>> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .context("workbook has no sheets")?,
    };
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    let mut rows = range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect::<Vec<String>>());
    let headers = rows
        .next()
        .with_context(|| format!("sheet {sheet_name} has no header row"))?;
    let body: Vec<Vec<String>> = rows.collect();

    orders_from_rows(&headers, &body).with_context(|| format!("failed to import sheet: {sheet_name}"))
}

pub struct XlsxOrderSource {
    pub path: PathBuf,
    pub sheet: Option<String>,
}

impl OrderSource for XlsxOrderSource {
    fn load_orders(&self) -> Result<Vec<Order>, SourceError> {
        Ok(import_orders_xlsx(&self.path, self.sheet.as_deref())?)
    }
}

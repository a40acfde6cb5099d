use std::path::{Path, PathBuf};

use crate::domain::entities::order::Order;
use crate::infra::import::csv::CsvOrderSource;
use crate::infra::import::xlsx::XlsxOrderSource;
use crate::infra::sqlite::repo::SqliteOrderSource;
use crate::usecase::ports::source::{OrderSource, SourceError};

/// Picks a source from the file extension and loads the record set once.
pub struct ImportService;

impl ImportService {
    pub fn source_for(path: &Path) -> Result<Box<dyn OrderSource>, SourceError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let path = PathBuf::from(path);

        match extension.as_str() {
            "csv" => Ok(Box::new(CsvOrderSource { path })),
            "xlsx" | "xls" => Ok(Box::new(XlsxOrderSource { path, sheet: None })),
            "sqlite" | "db" => Ok(Box::new(SqliteOrderSource { db_path: path })),
            other => Err(SourceError::Message(format!(
                "unsupported order file type: {other:?} ({})",
                path.display()
            ))),
        }
    }

    pub fn load_path(path: &Path) -> Result<Vec<Order>, SourceError> {
        let orders = Self::source_for(path)?.load_orders()?;
        log::info!("loaded {} orders from {}", orders.len(), path.display());
        Ok(orders)
    }
}

use std::path::PathBuf;

use crate::domain::entities::order::Order;
use crate::infra::sqlite::queries::load_orders;
use crate::usecase::ports::source::{OrderSource, SourceError};

pub struct SqliteOrderSource {
    pub db_path: PathBuf,
}

impl OrderSource for SqliteOrderSource {
    fn load_orders(&self) -> Result<Vec<Order>, SourceError> {
        load_orders(&self.db_path).map_err(SourceError::from)
    }
}

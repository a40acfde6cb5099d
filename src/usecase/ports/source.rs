use thiserror::Error;

use crate::domain::entities::order::Order;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("{0}")]
    Message(String),
}

impl From<anyhow::Error> for SourceError {
    fn from(err: anyhow::Error) -> Self {
        // `{:#}` keeps the context chain on one line.
        SourceError::Message(format!("{err:#}"))
    }
}

/// Supplies the fixed record set a table is built over.
pub trait OrderSource {
    fn load_orders(&self) -> Result<Vec<Order>, SourceError>;
}

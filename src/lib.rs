//! In-memory table engine for order records: filter, sort, paginate and
//! select over a fixed record set, driven by a single view-state store.

pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod ui;
pub mod usecase;

#[cfg(test)]
mod fixtures;

pub use config::EngineConfig;
pub use domain::columns::{order_columns, CellValue, ColumnDescriptor, ColumnKind, ColumnRegistry};
pub use domain::entities::order::{Order, OrderId, OrderStatus, TableRow};
pub use domain::entities::selection::SelectionTracker;
pub use domain::entities::view::{Pagination, SortDirection, SortKey, ViewState};
pub use error::ViewError;
pub use usecase::ports::source::{OrderSource, SourceError};
pub use usecase::services::import_service::ImportService;
pub use usecase::services::view_store::{ColumnState, PageSummary, PageView, ViewStore};

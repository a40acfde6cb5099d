use thiserror::Error;

/// Why a view update was rejected or a store could not be built.
///
/// Rejected updates never change the view state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("column is not sortable: {0}")]
    NotSortable(String),
    #[error("column is not filterable: {0}")]
    NotFilterable(String),
    #[error("column cannot be hidden: {0}")]
    NotHideable(String),
    #[error("page size must be greater than zero, got {0}")]
    InvalidPageSize(usize),
    #[error("unknown record: {0}")]
    UnknownRecord(String),
    #[error("duplicate column key: {0}")]
    DuplicateColumn(String),
    #[error("duplicate record id: {0}")]
    DuplicateRecordId(String),
    #[error("search column is not registered: {0}")]
    UnknownSearchColumn(String),
}

use std::collections::BTreeMap;

use crate::domain::entities::selection::SelectionTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

/// Everything the operator controls about what is rendered.
///
/// Only the view store writes this; readers get a shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filters: BTreeMap<String, String>,
    pub global_search: Option<String>,
    pub sort: Vec<SortKey>,
    pub column_visibility: BTreeMap<String, bool>,
    pub selection: SelectionTracker,
    pub pagination: Pagination,
}

impl ViewState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            filters: BTreeMap::new(),
            global_search: None,
            sort: Vec::new(),
            column_visibility: BTreeMap::new(),
            selection: SelectionTracker::default(),
            pagination: Pagination {
                page_index: 0,
                page_size,
            },
        }
    }

    pub fn is_visible(&self, column: &str) -> bool {
        self.column_visibility.get(column).copied().unwrap_or(true)
    }

    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sort
            .iter()
            .find(|key| key.column == column)
            .map(|key| key.direction)
    }

    pub fn search_term(&self) -> Option<&str> {
        self.global_search
            .as_deref()
            .filter(|term| !term.trim().is_empty())
    }
}

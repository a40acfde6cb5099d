//! Filter, sort and paginate: pure functions of the records and view state.

pub mod filter;
pub mod paginate;
pub mod sort;

use crate::config::EngineConfig;
use crate::domain::columns::ColumnRegistry;
use crate::domain::entities::view::ViewState;

pub use filter::filter_rows;
pub use paginate::{paginate, PageWindow};
pub use sort::{next_sort_state, sort_rows};

/// Output of one pass of the pipeline. Rows are positions into the record slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub filtered: Vec<usize>,
    pub ordered: Vec<usize>,
    pub window: PageWindow,
}

impl Derivation {
    pub fn page_rows(&self) -> &[usize] {
        self.window.slice(&self.ordered)
    }
}

pub fn derive<R>(
    records: &[R],
    registry: &ColumnRegistry<R>,
    state: &ViewState,
    config: &EngineConfig,
) -> Derivation {
    let filtered = filter_rows(
        records,
        registry,
        &state.filters,
        state.search_term(),
        &config.search_columns,
    );
    let ordered = sort_rows(records, registry, &filtered, &state.sort);
    let window = paginate(
        ordered.len(),
        state.pagination.page_index,
        state.pagination.page_size,
    );
    Derivation {
        filtered,
        ordered,
        window,
    }
}

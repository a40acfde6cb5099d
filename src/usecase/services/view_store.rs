use std::collections::HashMap;

use crate::config::EngineConfig;
use crate::domain::columns::{ColumnDescriptor, ColumnRegistry};
use crate::domain::entities::order::TableRow;
use crate::domain::entities::view::{SortDirection, SortKey, ViewState};
use crate::error::ViewError;
use crate::usecase::pipeline::{derive, next_sort_state, Derivation};

/// What the presentation layer renders for the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, R> {
    pub rows: Vec<&'a R>,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total_filtered: usize,
    pub total_selected_in_filtered: usize,
    pub can_prev: bool,
    pub can_next: bool,
    pub all_page_rows_selected: bool,
    pub some_page_rows_selected: bool,
}

/// Per-column header metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnState {
    pub key: &'static str,
    pub label: &'static str,
    pub visible: bool,
    pub sort: Option<SortDirection>,
    /// Position among the active sort keys, 0 = primary.
    pub sort_position: Option<usize>,
    pub filter: Option<String>,
    pub sortable: bool,
    pub filterable: bool,
    pub hideable: bool,
}

/// Owned snapshot handed to observers after each committed update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub row_ids: Vec<String>,
    pub page_index: usize,
    pub page_count: usize,
    pub total_filtered: usize,
    pub total_selected_in_filtered: usize,
}

type Observer = Box<dyn FnMut(&PageSummary)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    /// Filters or sorting: the row set or its order moved.
    Rows,
    Other,
}

/// Single owner of the view state for one table session.
///
/// Every update validates first, then applies to a copy of the state and
/// swaps it in, so a rejected update leaves nothing behind. The pipeline runs
/// before the update returns.
pub struct ViewStore<R> {
    records: Vec<R>,
    positions: HashMap<String, usize>,
    registry: ColumnRegistry<R>,
    config: EngineConfig,
    state: ViewState,
    derived: Derivation,
    last_rejection: Option<ViewError>,
    observers: Vec<Observer>,
}

impl<R: TableRow> ViewStore<R> {
    pub fn new(
        records: Vec<R>,
        registry: ColumnRegistry<R>,
        config: EngineConfig,
    ) -> Result<Self, ViewError> {
        let mut positions = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if positions.insert(record.row_id().to_string(), idx).is_some() {
                return Err(ViewError::DuplicateRecordId(record.row_id().to_string()));
            }
        }

        if let Some(missing) = config
            .search_columns
            .iter()
            .find(|key| registry.get(key).is_none())
        {
            return Err(ViewError::UnknownSearchColumn(missing.clone()));
        }

        let state = ViewState::with_page_size(config.default_page_size.max(1));
        let derived = derive(&records, &registry, &state, &config);
        log::info!(
            "view store ready: {} records, {} columns",
            records.len(),
            registry.len()
        );

        Ok(Self {
            records,
            positions,
            registry,
            config,
            state,
            derived,
            last_rejection: None,
            observers: Vec::new(),
        })
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&PageSummary) + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ---- queries ----

    pub fn page(&self) -> PageView<'_, R> {
        let page_rows = self.derived.page_rows();
        let rows: Vec<&R> = page_rows.iter().map(|&idx| &self.records[idx]).collect();
        let selected_on_page = self
            .state
            .selection
            .count_in(rows.iter().map(|record| record.row_id()));
        let window = self.derived.window;

        PageView {
            page_index: window.page_index,
            page_count: window.page_count,
            page_size: window.page_size,
            total_filtered: self.derived.filtered.len(),
            total_selected_in_filtered: self.selected_in_filtered(),
            can_prev: window.can_prev(),
            can_next: window.can_next(),
            all_page_rows_selected: !rows.is_empty() && selected_on_page == rows.len(),
            some_page_rows_selected: selected_on_page > 0 && selected_on_page < rows.len(),
            rows,
        }
    }

    pub fn columns(&self) -> Vec<ColumnState> {
        self.registry
            .iter()
            .map(|column| ColumnState {
                key: column.key,
                label: column.label,
                visible: self.state.is_visible(column.key),
                sort: self.state.sort_direction(column.key),
                sort_position: self
                    .state
                    .sort
                    .iter()
                    .position(|key| key.column == column.key),
                filter: self.state.filters.get(column.key).cloned(),
                sortable: column.sortable,
                filterable: column.filterable,
                hideable: column.hideable,
            })
            .collect()
    }

    pub fn visible_columns(&self) -> Vec<&ColumnDescriptor<R>> {
        self.registry
            .iter()
            .filter(|column| self.state.is_visible(column.key))
            .collect()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state.selection.is_selected(id)
    }

    pub fn selection_count(&self) -> usize {
        self.state.selection.count()
    }

    /// Every row passing the filters, in sorted order.
    pub fn filtered_rows(&self) -> Vec<&R> {
        self.derived
            .ordered
            .iter()
            .map(|&idx| &self.records[idx])
            .collect()
    }

    /// Selected records in input order, including ones hidden by filters.
    pub fn selected_rows(&self) -> Vec<&R> {
        self.records
            .iter()
            .filter(|record| self.state.selection.is_selected(record.row_id()))
            .collect()
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn last_rejection(&self) -> Option<&ViewError> {
        self.last_rejection.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &ColumnRegistry<R> {
        &self.registry
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    fn selected_in_filtered(&self) -> usize {
        self.state.selection.count_in(
            self.derived
                .filtered
                .iter()
                .map(|&idx| self.records[idx].row_id()),
        )
    }

    fn column(&self, key: &str) -> Result<&ColumnDescriptor<R>, ViewError> {
        self.registry
            .get(key)
            .ok_or_else(|| ViewError::UnknownColumn(key.to_string()))
    }

    fn check_sortable(&self, key: &str) -> Result<(), ViewError> {
        let column = self.column(key)?;
        if column.sortable {
            Ok(())
        } else {
            Err(ViewError::NotSortable(key.to_string()))
        }
    }

    fn check_filterable(&self, key: &str) -> Result<(), ViewError> {
        let column = self.column(key)?;
        if column.filterable {
            Ok(())
        } else {
            Err(ViewError::NotFilterable(key.to_string()))
        }
    }

    fn check_record(&self, id: &str) -> Result<(), ViewError> {
        if self.positions.contains_key(id) {
            Ok(())
        } else {
            Err(ViewError::UnknownRecord(id.to_string()))
        }
    }

    // ---- mutations ----

    pub fn set_column_filter(&mut self, key: &str, value: &str) {
        let checked = self.check_filterable(key);
        let key = key.to_string();
        let value = value.to_string();
        self.commit("set_column_filter", move |state| {
            checked?;
            if value.trim().is_empty() {
                state.filters.remove(&key);
            } else {
                state.filters.insert(key, value);
            }
            Ok(Change::Rows)
        });
    }

    pub fn set_global_search(&mut self, value: &str) {
        let term = Some(value.to_string()).filter(|term| !term.trim().is_empty());
        self.commit("set_global_search", move |state| {
            state.global_search = term;
            Ok(Change::Rows)
        });
    }

    /// Plain header click: cycles this column and drops any other sort keys.
    pub fn toggle_column_sort(&mut self, key: &str) {
        let checked = self.check_sortable(key);
        let key = key.to_string();
        self.commit("toggle_column_sort", move |state| {
            checked?;
            let next = next_sort_state(state.sort_direction(&key));
            state.sort = next
                .map(|direction| vec![SortKey { column: key, direction }])
                .unwrap_or_default();
            Ok(Change::Rows)
        });
    }

    /// Cycles this column in place, keeping the other sort keys.
    pub fn toggle_column_multi_sort(&mut self, key: &str) {
        let checked = self.check_sortable(key);
        let key = key.to_string();
        self.commit("toggle_column_multi_sort", move |state| {
            checked?;
            let position = state.sort.iter().position(|sort| sort.column == key);
            let current = position.map(|idx| state.sort[idx].direction);
            match (position, next_sort_state(current)) {
                (Some(idx), Some(direction)) => state.sort[idx].direction = direction,
                (Some(idx), None) => {
                    state.sort.remove(idx);
                }
                (None, Some(direction)) => state.sort.push(SortKey { column: key, direction }),
                (None, None) => {}
            }
            Ok(Change::Rows)
        });
    }

    /// Replaces all sort keys. Repeated columns keep their first occurrence.
    pub fn set_sort(&mut self, criteria: Vec<SortKey>) {
        let checked = criteria
            .iter()
            .try_for_each(|key| self.check_sortable(&key.column));
        self.commit("set_sort", move |state| {
            checked?;
            let mut sort: Vec<SortKey> = Vec::with_capacity(criteria.len());
            for key in criteria {
                if !sort.iter().any(|existing| existing.column == key.column) {
                    sort.push(key);
                }
            }
            state.sort = sort;
            Ok(Change::Rows)
        });
    }

    pub fn set_column_visibility(&mut self, key: &str, visible: bool) {
        let checked = self.column(key).and_then(|column| {
            if visible || column.hideable {
                Ok(())
            } else {
                Err(ViewError::NotHideable(column.key.to_string()))
            }
        });
        let key = key.to_string();
        self.commit("set_column_visibility", move |state| {
            checked?;
            state.column_visibility.insert(key, visible);
            Ok(Change::Other)
        });
    }

    /// Out-of-range indices land on the nearest existing page.
    pub fn set_page(&mut self, index: usize) {
        self.commit("set_page", move |state| {
            state.pagination.page_index = index;
            Ok(Change::Other)
        });
    }

    pub fn next_page(&mut self) {
        if self.derived.window.can_next() {
            self.set_page(self.derived.window.page_index + 1);
        }
    }

    pub fn previous_page(&mut self) {
        if self.derived.window.can_prev() {
            self.set_page(self.derived.window.page_index - 1);
        }
    }

    /// A new size returns to the first page. The current size is a no-op.
    pub fn set_page_size(&mut self, size: usize) {
        if size == self.state.pagination.page_size {
            self.last_rejection = None;
            return;
        }
        self.commit("set_page_size", move |state| {
            if size == 0 {
                return Err(ViewError::InvalidPageSize(size));
            }
            state.pagination.page_size = size;
            state.pagination.page_index = 0;
            Ok(Change::Other)
        });
    }

    pub fn toggle_row_selection(&mut self, id: &str) {
        let checked = self.check_record(id);
        let id = id.to_string();
        self.commit("toggle_row_selection", move |state| {
            checked?;
            state.selection.toggle(&id);
            Ok(Change::Other)
        });
    }

    pub fn set_row_selected(&mut self, id: &str, selected: bool) {
        let checked = self.check_record(id);
        let id = id.to_string();
        self.commit("set_row_selected", move |state| {
            checked?;
            if selected {
                state.selection.select(&id);
            } else {
                state.selection.deselect(&id);
            }
            Ok(Change::Other)
        });
    }

    /// Selects or deselects exactly the rows on the current page.
    pub fn toggle_all_on_page(&mut self, selected: bool) {
        let page_ids: Vec<String> = self
            .derived
            .page_rows()
            .iter()
            .map(|&idx| self.records[idx].row_id().to_string())
            .collect();
        self.commit("toggle_all_on_page", move |state| {
            state
                .selection
                .select_all_visible(page_ids.iter().map(String::as_str), selected);
            Ok(Change::Other)
        });
    }

    pub fn clear_selection(&mut self) {
        self.commit("clear_selection", |state| {
            state.selection.clear();
            Ok(Change::Other)
        });
    }

    /// Drops every column filter and the global search.
    pub fn clear_filters(&mut self) {
        self.commit("clear_filters", |state| {
            state.filters.clear();
            state.global_search = None;
            Ok(Change::Rows)
        });
    }

    /// Back to the state the store started with, selection included.
    pub fn reset_view(&mut self) {
        let page_size = self.config.default_page_size.max(1);
        self.commit("reset_view", move |state| {
            *state = ViewState::with_page_size(page_size);
            Ok(Change::Other)
        });
    }

    fn commit<F>(&mut self, action: &str, change: F)
    where
        F: FnOnce(&mut ViewState) -> Result<Change, ViewError>,
    {
        let mut next = self.state.clone();
        match change(&mut next) {
            Ok(kind) => {
                if kind == Change::Rows && self.config.reset_page_on_change {
                    next.pagination.page_index = 0;
                }
                self.state = next;
                self.last_rejection = None;
                self.rederive();
                log::debug!(
                    "{action}: {} filtered, page {}/{}",
                    self.derived.filtered.len(),
                    self.derived.window.page_index + 1,
                    self.derived.window.page_count
                );
                self.notify();
            }
            Err(err) => {
                log::warn!("{action} ignored: {err}");
                self.last_rejection = Some(err);
            }
        }
    }

    fn rederive(&mut self) {
        self.derived = derive(&self.records, &self.registry, &self.state, &self.config);
        // Keep the stored page in range once the row count shrinks.
        self.state.pagination.page_index = self.derived.window.page_index;
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let summary = PageSummary {
            row_ids: self
                .derived
                .page_rows()
                .iter()
                .map(|&idx| self.records[idx].row_id().to_string())
                .collect(),
            page_index: self.derived.window.page_index,
            page_count: self.derived.window.page_count,
            total_filtered: self.derived.filtered.len(),
            total_selected_in_filtered: self.selected_in_filtered(),
        };
        for observer in &mut self.observers {
            observer(&summary);
        }
    }
}

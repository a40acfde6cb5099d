use std::collections::BTreeMap;

use crate::domain::columns::{contains_ignore_case, ColumnRegistry};

/// Positions of the records that pass every column filter and the global
/// search, in input order.
///
/// Blank filter values are ignored, as are filters on columns that are
/// unknown or not filterable.
pub fn filter_rows<R>(
    records: &[R],
    registry: &ColumnRegistry<R>,
    filters: &BTreeMap<String, String>,
    global_search: Option<&str>,
    search_columns: &[String],
) -> Vec<usize> {
    let active_filters: Vec<_> = filters
        .iter()
        .filter_map(|(key, value)| {
            if value.trim().is_empty() {
                return None;
            }
            registry
                .get(key)
                .filter(|column| column.filterable)
                .map(|column| (column, value.as_str()))
        })
        .collect();

    let search_term = global_search.filter(|term| !term.trim().is_empty());
    let searchable: Vec<_> = search_columns
        .iter()
        .filter_map(|key| registry.get(key))
        .collect();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            active_filters
                .iter()
                .all(|(column, value)| column.matches(record, value))
        })
        .filter(|(_, record)| match search_term {
            Some(term) => searchable
                .iter()
                .any(|column| contains_ignore_case(&column.value(record).search_text(), term)),
            None => true,
        })
        .map(|(idx, _)| idx)
        .collect()
}

use std::cmp::Ordering;

use crate::domain::columns::{ColumnDescriptor, ColumnRegistry};
use crate::domain::entities::view::{SortDirection, SortKey};

/// Header click cycle: unsorted, ascending, descending, unsorted.
pub fn next_sort_state(current: Option<SortDirection>) -> Option<SortDirection> {
    match current {
        None => Some(SortDirection::Asc),
        Some(SortDirection::Asc) => Some(SortDirection::Desc),
        Some(SortDirection::Desc) => None,
    }
}

/// Orders `rows` (positions into `records`) by `criteria`, primary key first.
///
/// The sort is stable: rows that tie on every key keep their input order.
/// Keys on unknown or unsortable columns are skipped.
pub fn sort_rows<R>(
    records: &[R],
    registry: &ColumnRegistry<R>,
    rows: &[usize],
    criteria: &[SortKey],
) -> Vec<usize> {
    let keys: Vec<(&ColumnDescriptor<R>, SortDirection)> = criteria
        .iter()
        .filter_map(|key| {
            registry
                .get(&key.column)
                .filter(|column| column.sortable)
                .map(|column| (column, key.direction))
        })
        .collect();

    let mut sorted = rows.to_vec();
    if keys.is_empty() {
        return sorted;
    }

    sorted.sort_by(|&a, &b| {
        keys.iter()
            .map(|(column, direction)| {
                let ordering = column.compare(&records[a], &records[b]);
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            })
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

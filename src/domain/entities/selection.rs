use std::collections::BTreeSet;

/// Selected record identifiers.
///
/// Never keyed by row position, so a selection survives re-sorting,
/// re-filtering and paging. Ids hidden by a filter stay selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: BTreeSet<String>,
}

impl SelectionTracker {
    pub fn select(&mut self, id: &str) {
        self.selected.insert(id.to_string());
    }

    pub fn deselect(&mut self, id: &str) {
        self.selected.remove(id);
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Adds or removes exactly the given ids; other selections are untouched.
    pub fn select_all_visible<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>, value: bool) {
        for id in ids {
            if value {
                self.select(id);
            } else {
                self.deselect(id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn count_in<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> usize {
        ids.into_iter().filter(|id| self.is_selected(id)).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut selection = SelectionTracker::default();
        selection.toggle("order-1");
        assert!(selection.is_selected("order-1"));
        selection.toggle("order-1");
        assert!(!selection.is_selected("order-1"));
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn deselecting_a_page_keeps_other_pages() {
        let mut selection = SelectionTracker::default();
        selection.select_all_visible(["a", "b"], true);
        selection.select_all_visible(["c", "d"], true);
        selection.select_all_visible(["a", "b"], false);

        let remaining: Vec<&str> = selection.iter().collect();
        assert_eq!(remaining, vec!["c", "d"]);
    }

    #[test]
    fn count_in_only_counts_given_ids() {
        let mut selection = SelectionTracker::default();
        selection.select("a");
        selection.select("z");
        assert_eq!(selection.count_in(["a", "b", "c"]), 1);
        assert_eq!(selection.count(), 2);
    }
}

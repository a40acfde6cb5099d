/// The slice of an ordered sequence that makes up the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub fn can_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    pub fn slice<'a, T>(&self, ordered: &'a [T]) -> &'a [T] {
        &ordered[self.start.min(ordered.len())..self.end.min(ordered.len())]
    }
}

/// At least one page, even for an empty sequence.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Window for `page_index`, clamped to the last existing page.
pub fn paginate(len: usize, page_index: usize, page_size: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let page_count = page_count(len, page_size);
    let page_index = page_index.min(page_count - 1);
    let start = page_index * page_size;
    let end = (start + page_size).min(len);
    PageWindow {
        page_index,
        page_count,
        page_size,
        start,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_one_empty_page() {
        let window = paginate(0, 0, 10);
        assert_eq!(window.page_count, 1);
        assert_eq!(window.start, window.end);
        assert!(!window.can_prev());
        assert!(!window.can_next());
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let window = paginate(17, 5, 10);
        assert_eq!(window.page_count, 2);
        assert_eq!(window.page_index, 1);
        assert_eq!((window.start, window.end), (10, 17));
        assert!(window.can_prev());
        assert!(!window.can_next());
    }

    #[test]
    fn pages_cover_sequence_without_gaps() {
        let ordered: Vec<usize> = (100..123).collect();
        for page_size in [1, 5, 7, 10, 23, 50] {
            let count = page_count(ordered.len(), page_size);
            let joined: Vec<usize> = (0..count)
                .flat_map(|page| paginate(ordered.len(), page, page_size).slice(&ordered).to_vec())
                .collect();
            assert_eq!(joined, ordered, "page size {page_size}");
        }
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let window = paginate(3, 1, 0);
        assert_eq!(window.page_size, 1);
        assert_eq!(window.page_count, 3);
        assert_eq!((window.start, window.end), (1, 2));
    }
}

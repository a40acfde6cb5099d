pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 6] = [5, 10, 20, 30, 40, 50];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub default_page_size: usize,
    /// Page sizes offered to the operator. Other sizes are still accepted.
    pub page_size_options: Vec<usize>,
    /// Columns the global search looks at.
    pub search_columns: Vec<String>,
    /// Jump back to the first page when filters or sorting change,
    /// instead of clamping the current page.
    pub reset_page_on_change: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            search_columns: vec!["product".to_string()],
            reset_page_on_change: false,
        }
    }
}

impl EngineConfig {
    pub fn with_search_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size.max(1);
        self
    }

    pub fn with_reset_page_on_change(mut self, reset: bool) -> Self {
        self.reset_page_on_change = reset;
        self
    }
}

/// Limits for walking successive pages
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    pub start_page: u32,
    pub max_pages: Option<usize>,
}

impl PaginationConfig {
    pub fn new() -> Self {
        Self {
            start_page: 1,
            max_pages: None,
        }
    }

    pub fn starting_at(mut self, page: u32) -> Self {
        self.start_page = page;
        self
    }

    pub fn with_max_pages(mut self, max: usize) -> Self {
        self.max_pages = Some(max);
        self
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new()
    }
}

use super::config::PaginationConfig;

/// Tracks the page to request next
pub struct PageIterator {
    current_page: u32,
    visited: usize,
    config: PaginationConfig,
}

impl PageIterator {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            current_page: config.start_page,
            visited: 0,
            config,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn has_reached_max(&self) -> bool {
        self.config.max_pages.is_some_and(|max| self.visited >= max)
    }

    pub fn advance(&mut self) {
        self.current_page += 1;
        self.visited += 1;
    }
}

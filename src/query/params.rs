use crate::errors::FetchError;

pub const DEFAULT_START: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 3;

/// Pagination, filter and sort preferences for one list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequestParams {
    /// Page number, 1-based
    pub start: u32,
    /// Page size
    pub limit: u32,
    /// Exact category name to filter by
    pub category: Option<String>,
    /// Sort direction applied to the like count ("asc" / "desc")
    pub like: Option<String>,
    pub populate_video: bool,
}

impl Default for ListRequestParams {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            limit: DEFAULT_LIMIT,
            category: None,
            like: None,
            populate_video: true,
        }
    }
}

impl ListRequestParams {
    pub fn new(start: u32, limit: u32) -> Self {
        Self {
            start,
            limit,
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_like(mut self, like: impl Into<String>) -> Self {
        self.like = Some(like.into());
        self
    }

    pub fn without_video(mut self) -> Self {
        self.populate_video = false;
        self
    }

    /// Same filters, different page
    pub fn at_page(&self, start: u32) -> Self {
        Self {
            start,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), FetchError> {
        Self::check_positive("start", self.start)?;
        Self::check_positive("limit", self.limit)
    }

    fn check_positive(name: &'static str, value: u32) -> Result<(), FetchError> {
        if value == 0 {
            return Err(FetchError::InvalidParameter { name, value });
        }
        Ok(())
    }
}

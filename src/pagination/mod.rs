mod config;
mod iterator;

pub use config::PaginationConfig;
pub use iterator::PageIterator;

use crate::domain::ListResponse;

/// Check if the API reports pages after this one
pub fn has_more_pages(response: &ListResponse) -> bool {
    extract_has_more(response).unwrap_or(false)
}

fn extract_has_more(response: &ListResponse) -> Option<bool> {
    let meta = response.page_meta()?;
    Some(meta.page < meta.page_count)
}

mod media_client;
mod pending;

pub use media_client::{FetchMode, ListFetch, MediaListClient, LIST_PATH};
pub use pending::PendingList;

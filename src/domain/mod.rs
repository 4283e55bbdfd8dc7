pub mod models;

pub use models::{
    Author, Avatar, Category, Cover, ListResponse, MediaItem, MediaType, PageMeta, ResponseMeta,
    Video,
};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use crate::api::{LIST_PATH, MediaListClient};
use crate::config::AppConfig;
use crate::domain::{ListResponse, MediaItem, PageMeta};
use crate::errors::fetch_context;
use crate::pagination::{PageIterator, PaginationConfig, has_more_pages};
use crate::query::ListRequestParams;

/// Fetches one or more pages and prints them
pub struct ListingService {
    client: MediaListClient,
    endpoint: String,
}

/// Items gathered across the pages that were walked
#[derive(Debug, Default)]
pub struct Listing {
    pub items: Vec<MediaItem>,
    pub last_page: Option<PageMeta>,
    pub requests: usize,
}

impl ListingService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = MediaListClient::from_config(config)?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: MediaListClient) -> Self {
        let endpoint = format!("{}{}", client.base_url(), LIST_PATH);
        Self { client, endpoint }
    }

    pub async fn run(&self, params: &ListRequestParams, max_pages: usize, json: bool) -> Result<()> {
        let listing = self.collect(params, max_pages).await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&listing.items)?);
        } else {
            Self::print_items(&listing);
        }
        Ok(())
    }

    /// Walk pages starting at `params.start`, one request per page
    pub async fn collect(&self, params: &ListRequestParams, max_pages: usize) -> Result<Listing> {
        let config = PaginationConfig::new()
            .starting_at(params.start)
            .with_max_pages(max_pages);
        let mut pages = PageIterator::new(config);
        let mut listing = Listing::default();

        loop {
            if pages.has_reached_max() {
                break;
            }

            let response = self.fetch_page(params, pages.current_page()).await?;
            listing.requests += 1;

            let more = has_more_pages(&response);
            listing.last_page = response.page_meta().copied();
            listing.items.extend(response.data);

            if !more {
                break;
            }

            pages.advance();
        }

        info!(
            "Collected {} media items in {} request(s)",
            listing.items.len(),
            listing.requests
        );
        Ok(listing)
    }

    async fn fetch_page(&self, params: &ListRequestParams, page: u32) -> Result<ListResponse> {
        self.client
            .fetch_list(&params.at_page(page))
            .await
            .with_context(|| fetch_context(&self.endpoint))
    }

    // --- Output ---

    fn print_items(listing: &Listing) {
        for item in &listing.items {
            println!("{}", Self::format_item(item));
        }

        if let Some(meta) = &listing.last_page {
            println!(
                "{}",
                format!(
                    "page {} of {} ({} items total)",
                    meta.page, meta.page_count, meta.total
                )
                .dimmed()
            );
        }
    }

    fn format_item(item: &MediaItem) -> String {
        let kind = if item.is_video() {
            item.media_type.to_string().magenta()
        } else {
            item.media_type.to_string().cyan()
        };

        let categories = item.category_names().join(", ");

        format!(
            "{} [{}] by {} | {} likes | {}",
            item.title.bold(),
            kind,
            item.author.name,
            item.like.to_string().yellow(),
            categories.dimmed()
        )
    }
}

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod query;
pub mod services;

pub use api::{FetchMode, ListFetch, MediaListClient, PendingList};
pub use domain::{ListResponse, MediaItem, MediaType};
pub use errors::FetchError;
pub use query::{ListRequestParams, QueryMap, QueryValue, build_list_query};

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::{Command, ConnectionArgs, ListArgs};
use crate::config::AppConfig;
use crate::services::listing::ListingService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_list(filters: &ListArgs, connection: &ConnectionArgs, pages: u64, json: bool) -> Result<()> {
    let config = build_config(connection);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ListingService::new(&config)?;
        service.run(&filters.to_params(), pages as usize, json).await
    })
}

pub fn handle_query(filters: &ListArgs, connection: &ConnectionArgs) -> Result<()> {
    let config = build_config(connection);
    let client = MediaListClient::from_config(&config)?;
    let pending = client.list(filters.to_params());
    pending.params().validate()?;

    println!(
        "{}{}?{}",
        client.base_url(),
        api::LIST_PATH,
        pending.query().to_query_string()
    );
    Ok(())
}

fn build_config(connection: &ConnectionArgs) -> AppConfig {
    let mut config = AppConfig::from_env();
    if let Some(base_url) = &connection.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(timeout) = connection.timeout {
        config.api.timeout_secs = Some(timeout);
    }
    config
}

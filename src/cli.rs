use clap::{Args, Parser, Subcommand};

use crate::query::ListRequestParams;

#[derive(Parser, Debug)]
#[command(author, version, about = "media list client for the content API")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch media items from the content API
    List {
        #[command(flatten)]
        filters: ListArgs,
        #[command(flatten)]
        connection: ConnectionArgs,
        /// Number of pages to fetch, one request each
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        pages: u64,
        /// Print items as JSON instead of one line per item
        #[arg(long)]
        json: bool,
    },
    /// Print the request a list call would send, without sending it
    Query {
        #[command(flatten)]
        filters: ListArgs,
        #[command(flatten)]
        connection: ConnectionArgs,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
    /// Items per page
    #[arg(short = 's', long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: u32,
    /// Only items in this category (exact name)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Sort by like count in this direction (asc / desc)
    #[arg(short, long)]
    pub like: Option<String>,
    /// Do not populate the video relation
    #[arg(long)]
    pub no_video: bool,
}

impl ListArgs {
    pub fn to_params(&self) -> ListRequestParams {
        let mut params = ListRequestParams::new(self.page, self.page_size);
        params.category = self.category.clone();
        params.like = self.like.clone();
        params.populate_video = !self.no_video;
        params
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ConnectionArgs {
    /// API base URL (overrides MEDIA_API_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

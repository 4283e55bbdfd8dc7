use anyhow::Result;

use crate::api::pending::PendingList;
use crate::config::{ApiSettings, AppConfig};
use crate::domain::ListResponse;
use crate::errors::FetchError;
use crate::http::ApiClient;
use crate::query::ListRequestParams;

pub const LIST_PATH: &str = "/list";

/// How the caller wants the list request carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// Send now and hand back the decoded body
    #[default]
    Immediate,
    /// Hand back a request handle; nothing is sent until it is awaited
    Deferred,
}

/// Outcome of [`MediaListClient::fetch`]
pub enum ListFetch<'a> {
    Ready(Result<ListResponse, FetchError>),
    Pending(PendingList<'a>),
}

impl<'a> ListFetch<'a> {
    /// Resolve either variant to the response
    pub async fn resolve(self) -> Result<ListResponse, FetchError> {
        match self {
            Self::Ready(result) => result,
            Self::Pending(pending) => pending.await,
        }
    }
}

/// Client for the media list endpoint of the content API
#[derive(Debug, Clone)]
pub struct MediaListClient {
    pub(crate) http: ApiClient,
}

impl MediaListClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let http = ApiClient::new(settings)?;
        Ok(Self { http })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(&config.api)
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Fetch one page of media items
    pub async fn fetch_list(&self, params: &ListRequestParams) -> Result<ListResponse, FetchError> {
        self.list(params.clone()).send().await
    }

    /// Describe a list request without sending it
    pub fn list(&self, params: ListRequestParams) -> PendingList<'_> {
        PendingList::new(self, params)
    }

    pub async fn fetch(&self, params: ListRequestParams, mode: FetchMode) -> ListFetch<'_> {
        match mode {
            FetchMode::Immediate => ListFetch::Ready(self.fetch_list(&params).await),
            FetchMode::Deferred => ListFetch::Pending(self.list(params)),
        }
    }
}

use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::ApiSettings;
use crate::errors::FetchError;
use crate::query::QueryMap;

/// HTTP client bound to the content API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = Self::build_client(settings)?;
        let base_url = settings.base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Single GET with the given parameters, decoding the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryMap,
    ) -> Result<T, FetchError> {
        let url = self.endpoint(path);
        debug!("GET {}?{}", url, query.to_query_string());

        let response = self.send_get_request(&url, query).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} returned status {}", url, status);
            return Err(FetchError::http_status(&url, status, &body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| Self::transport_error(&url, source))?;

        serde_json::from_slice(&bytes).map_err(|source| FetchError::Decode { url, source })
    }

    fn build_client(settings: &ApiSettings) -> Result<Client> {
        let mut builder = Client::builder().user_agent(settings.user_agent.as_str());
        if let Some(timeout_secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        builder.build().context("Failed to build HTTP client")
    }

    async fn send_get_request(
        &self,
        url: &str,
        query: &QueryMap,
    ) -> Result<reqwest::Response, FetchError> {
        self.client
            .get(url)
            .query(&query.to_pairs())
            .send()
            .await
            .map_err(|source| Self::transport_error(url, source))
    }

    fn transport_error(url: &str, source: reqwest::Error) -> FetchError {
        FetchError::Transport {
            url: url.to_string(),
            source,
        }
    }
}

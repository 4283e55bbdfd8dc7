use log::info;
use std::future::{Future, IntoFuture};
use std::pin::Pin;

use crate::api::media_client::{LIST_PATH, MediaListClient};
use crate::domain::ListResponse;
use crate::errors::FetchError;
use crate::query::{ListRequestParams, QueryMap, build_list_query};

/// A list request that runs when awaited
///
/// Dropping the handle, or the future it turns into, abandons the request.
#[must_use = "a pending list does nothing until awaited"]
pub struct PendingList<'a> {
    client: &'a MediaListClient,
    params: ListRequestParams,
}

impl<'a> PendingList<'a> {
    pub(crate) fn new(client: &'a MediaListClient, params: ListRequestParams) -> Self {
        Self { client, params }
    }

    pub fn params(&self) -> &ListRequestParams {
        &self.params
    }

    /// The parameters that will be sent
    pub fn query(&self) -> QueryMap {
        build_list_query(&self.params)
    }

    pub async fn send(self) -> Result<ListResponse, FetchError> {
        self.params.validate()?;

        let query = build_list_query(&self.params);
        let response: ListResponse = self.client.http.get_json(LIST_PATH, &query).await?;

        info!(
            "Fetched {} media items (page {}, size {})",
            response.data.len(),
            self.params.start,
            self.params.limit
        );
        Ok(response)
    }
}

impl<'a> IntoFuture for PendingList<'a> {
    type Output = Result<ListResponse, FetchError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send + 'a>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.send())
    }
}

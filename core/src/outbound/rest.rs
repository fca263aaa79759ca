//! Reqwest-backed marketplace repository.
//!
//! This adapter owns transport details only: URL and query-string
//! construction, timeout and HTTP error mapping, and JSON decoding into
//! domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::craftsman::{Craftsman, CraftsmanPatch, CraftsmanQuery};
use crate::domain::job::{Job, JobFilter, JobPatch, NewJob};
use crate::domain::message::{Message, NewMessage};
use crate::domain::ports::{MarketRepository, RepositoryError};
use crate::domain::review::{Review, ReviewFilter};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Marketplace repository that talks to the remote REST store.
pub struct RestMarketRepository {
    client: Client,
    base_url: Url,
}

impl RestMarketRepository {
    /// Build an adapter with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn resource_url(&self, segments: &[&str]) -> Result<Url, RepositoryError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                RepositoryError::transport("base URL cannot carry path segments")
            })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        missing: Option<(&'static str, &str)>,
    ) -> Result<T, RepositoryError> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_response(response, missing).await
    }

    async fn send_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        body: &B,
        missing: Option<(&'static str, &str)>,
    ) -> Result<T, RepositoryError> {
        let response = request
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_response(response, missing).await
    }
}

#[async_trait]
impl MarketRepository for RestMarketRepository {
    async fn list_craftsmen(
        &self,
        query: &CraftsmanQuery,
    ) -> Result<Vec<Craftsman>, RepositoryError> {
        let mut url = self.resource_url(&["craftsmen"])?;
        url.query_pairs_mut().extend_pairs(craftsman_query_pairs(query));
        self.get_json(url, None).await
    }

    async fn get_craftsman(&self, id: &str) -> Result<Craftsman, RepositoryError> {
        let url = self.resource_url(&["craftsmen", id])?;
        self.get_json(url, Some(("craftsmen", id))).await
    }

    async fn update_craftsman(
        &self,
        id: &str,
        patch: &CraftsmanPatch,
    ) -> Result<Craftsman, RepositoryError> {
        let url = self.resource_url(&["craftsmen", id])?;
        debug!(%url, "PUT");
        self.send_json(self.client.put(url), patch, Some(("craftsmen", id)))
            .await
    }

    async fn list_reviews(&self, filter: &ReviewFilter) -> Result<Vec<Review>, RepositoryError> {
        let mut url = self.resource_url(&["reviews"])?;
        if let Some(craftsman_id) = &filter.craftsman_id {
            url.query_pairs_mut().append_pair("craftsman_id", craftsman_id);
        }
        self.get_json(url, None).await
    }

    async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, RepositoryError> {
        let mut url = self.resource_url(&["jobs"])?;
        url.query_pairs_mut().extend_pairs(job_filter_pairs(filter));
        self.get_json(url, None).await
    }

    async fn get_job(&self, id: &str) -> Result<Job, RepositoryError> {
        let url = self.resource_url(&["jobs", id])?;
        self.get_json(url, Some(("jobs", id))).await
    }

    async fn create_job(&self, job: &NewJob) -> Result<Job, RepositoryError> {
        let url = self.resource_url(&["jobs"])?;
        debug!(%url, "POST");
        self.send_json(self.client.post(url), job, None).await
    }

    async fn update_job(&self, id: &str, patch: &JobPatch) -> Result<Job, RepositoryError> {
        // The store's update verb is PUT; it merges partial bodies.
        let url = self.resource_url(&["jobs", id])?;
        debug!(%url, "PUT");
        self.send_json(self.client.put(url), patch, Some(("jobs", id)))
            .await
    }

    async fn list_messages(&self, job_id: &str) -> Result<Vec<Message>, RepositoryError> {
        let mut url = self.resource_url(&["messages"])?;
        url.query_pairs_mut().append_pair("job_id", job_id);
        self.get_json(url, None).await
    }

    async fn create_message(&self, message: &NewMessage) -> Result<Message, RepositoryError> {
        let url = self.resource_url(&["messages"])?;
        debug!(%url, "POST");
        self.send_json(self.client.post(url), message, None).await
    }
}

/// Query pairs for a craftsman listing. The store only sees `order` when
/// a sort field is given, mirroring its own default handling.
fn craftsman_query_pairs(query: &CraftsmanQuery) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(category) = &query.category {
        pairs.push(("category", category.label().to_owned()));
    }
    if let Some(prefecture) = &query.prefecture {
        pairs.push(("prefecture", prefecture.clone()));
    }
    if let Some(sort) = query.sort {
        pairs.push(("sortBy", sort.by.as_query_value().to_owned()));
        pairs.push(("order", sort.order.as_query_value().to_owned()));
    }
    pairs
}

fn job_filter_pairs(filter: &JobFilter) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(craftsman_id) = &filter.craftsman_id {
        pairs.push(("craftsman_id", craftsman_id.clone()));
    }
    if let Some(customer_id) = &filter.customer_id {
        pairs.push(("customer_id", customer_id.clone()));
    }
    pairs
}

async fn decode_response<T: DeserializeOwned>(
    response: Response,
    missing: Option<(&'static str, &str)>,
) -> Result<T, RepositoryError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref(), missing));
    }
    serde_json::from_slice(body.as_ref())
        .map_err(|error| RepositoryError::decode(format!("invalid JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> RepositoryError {
    RepositoryError::transport(error.to_string())
}

fn map_status_error(
    status: StatusCode,
    body: &[u8],
    missing: Option<(&'static str, &str)>,
) -> RepositoryError {
    if status == StatusCode::NOT_FOUND {
        if let Some((resource, id)) = missing {
            return RepositoryError::not_found(resource, id);
        }
    }
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };
    RepositoryError::transport(message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

//! Outbound port for the marketplace data store.
//!
//! The domain only ever talks to storage through [`MarketRepository`];
//! the REST adapter and the in-memory fallback both implement it, so
//! services and tests are backend-agnostic.

use async_trait::async_trait;
use thiserror::Error;

use super::craftsman::{Craftsman, CraftsmanPatch, CraftsmanQuery};
use super::job::{Job, JobFilter, JobPatch, NewJob};
use super::message::{Message, NewMessage};
use super::review::{Review, ReviewFilter};

/// Failure raised by a repository implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backend could not be reached, or refused the operation.
    #[error("transport failure: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },
    /// A record with the given id does not exist.
    #[error("{resource} {id} not found")]
    NotFound {
        /// Resource collection that was queried.
        resource: &'static str,
        /// Id that matched nothing.
        id: String,
    },
    /// The backend answered, but the payload did not parse.
    #[error("malformed payload: {message}")]
    Decode {
        /// Description of the parse failure.
        message: String,
    },
}

impl RepositoryError {
    /// Helper for transport failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for missing records.
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Helper for malformed payloads.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Persistence operations the domain needs from a marketplace store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketRepository: Send + Sync {
    /// List craftsmen matching the query's filters, in the query's order.
    async fn list_craftsmen(
        &self,
        query: &CraftsmanQuery,
    ) -> Result<Vec<Craftsman>, RepositoryError>;

    /// Fetch a single craftsman by id.
    async fn get_craftsman(&self, id: &str) -> Result<Craftsman, RepositoryError>;

    /// Apply a partial update to a craftsman and return the updated
    /// record.
    async fn update_craftsman(
        &self,
        id: &str,
        patch: &CraftsmanPatch,
    ) -> Result<Craftsman, RepositoryError>;

    /// List reviews matching the filter.
    async fn list_reviews(&self, filter: &ReviewFilter) -> Result<Vec<Review>, RepositoryError>;

    /// List jobs matching the filter.
    async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, RepositoryError>;

    /// Fetch a single job by id.
    async fn get_job(&self, id: &str) -> Result<Job, RepositoryError>;

    /// Persist a new job. The store assigns `id` and `created_at`.
    async fn create_job(&self, job: &NewJob) -> Result<Job, RepositoryError>;

    /// Apply a partial update to a job and return the updated record.
    async fn update_job(&self, id: &str, patch: &JobPatch) -> Result<Job, RepositoryError>;

    /// List a job's messages in send order.
    async fn list_messages(&self, job_id: &str) -> Result<Vec<Message>, RepositoryError>;

    /// Persist a new message. The store assigns `id` and `created_at`.
    async fn create_message(&self, message: &NewMessage) -> Result<Message, RepositoryError>;
}

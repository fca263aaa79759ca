//! In-memory fallback repository seeded from the bundled dataset.
//!
//! Used when no remote store is configured or reachable. Reads serve the
//! seed dataset; creates fail closed so nothing pretends to persist; the
//! only records status updates may touch are the mutable demo jobs, and
//! those changes live for the life of the process only.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use demo_data::{JobSeedStatus, is_demo_id};

use crate::domain::craftsman::{Craftsman, CraftsmanPatch, CraftsmanQuery, ServiceCategory};
use crate::domain::job::{Job, JobFilter, JobPatch, JobStatus, NewJob};
use crate::domain::message::{Message, NewMessage};
use crate::domain::ports::{MarketRepository, RepositoryError};
use crate::domain::review::{Review, ReviewFilter};

const OFFLINE_CREATE: &str = "offline fallback cannot create records";
const OFFLINE_UPDATE: &str = "offline fallback can only modify demo records";
const POISONED_LOCK: &str = "fallback state lock poisoned";

#[derive(Debug)]
struct State {
    craftsmen: Vec<Craftsman>,
    reviews: Vec<Review>,
    jobs: Vec<Job>,
}

/// Marketplace repository backed by process-local seed data.
pub struct MemoryMarketRepository {
    state: RwLock<State>,
}

impl MemoryMarketRepository {
    /// Repository seeded with the bundled catalogue, reviews, and demo
    /// jobs, with demo dates anchored to the supplied instant.
    #[must_use]
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let craftsmen = demo_data::craftsmen().iter().map(craftsman_from_record).collect();
        let reviews = demo_data::reviews()
            .iter()
            .filter_map(review_from_record)
            .collect();
        let jobs = demo_data::demo_jobs(now).iter().map(job_from_record).collect();
        Self {
            state: RwLock::new(State {
                craftsmen,
                reviews,
                jobs,
            }),
        }
    }

}

#[async_trait]
impl MarketRepository for MemoryMarketRepository {
    async fn list_craftsmen(
        &self,
        query: &CraftsmanQuery,
    ) -> Result<Vec<Craftsman>, RepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::transport(POISONED_LOCK))?;
        Ok(query.apply(state.craftsmen.clone()))
    }

    async fn get_craftsman(&self, id: &str) -> Result<Craftsman, RepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::transport(POISONED_LOCK))?;
        state
            .craftsmen
            .iter()
            .find(|craftsman| craftsman.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("craftsmen", id))
    }

    async fn update_craftsman(
        &self,
        _id: &str,
        _patch: &CraftsmanPatch,
    ) -> Result<Craftsman, RepositoryError> {
        // Catalogue records are never demo ids, so offline profile edits
        // are refused like any other non-demo mutation.
        Err(RepositoryError::transport(OFFLINE_UPDATE))
    }

    async fn list_reviews(&self, filter: &ReviewFilter) -> Result<Vec<Review>, RepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::transport(POISONED_LOCK))?;
        Ok(state
            .reviews
            .iter()
            .filter(|review| filter.matches(review))
            .cloned()
            .collect())
    }

    async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, RepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::transport(POISONED_LOCK))?;
        Ok(state
            .jobs
            .iter()
            .filter(|job| filter.matches(job))
            .cloned()
            .collect())
    }

    async fn get_job(&self, id: &str) -> Result<Job, RepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::transport(POISONED_LOCK))?;
        state
            .jobs
            .iter()
            .find(|job| job.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("jobs", id))
    }

    async fn create_job(&self, _job: &NewJob) -> Result<Job, RepositoryError> {
        Err(RepositoryError::transport(OFFLINE_CREATE))
    }

    async fn update_job(&self, id: &str, patch: &JobPatch) -> Result<Job, RepositoryError> {
        if !is_demo_id(id) {
            return Err(RepositoryError::transport(OFFLINE_UPDATE));
        }
        let mut state = self
            .state
            .write()
            .map_err(|_| RepositoryError::transport(POISONED_LOCK))?;
        let job = state
            .jobs
            .iter_mut()
            .find(|job| job.id == id)
            .ok_or_else(|| RepositoryError::not_found("jobs", id))?;
        if let Some(status) = patch.status {
            job.status = status;
        }
        if let Some(confirmed_at) = patch.confirmed_at {
            job.confirmed_at = Some(confirmed_at);
        }
        Ok(job.clone())
    }

    async fn list_messages(&self, _job_id: &str) -> Result<Vec<Message>, RepositoryError> {
        // Nothing beyond the seed script exists offline; the conversation
        // layer supplies the script itself.
        Ok(Vec::new())
    }

    async fn create_message(&self, _message: &NewMessage) -> Result<Message, RepositoryError> {
        Err(RepositoryError::transport(OFFLINE_CREATE))
    }
}

fn craftsman_from_record(record: &demo_data::CraftsmanRecord) -> Craftsman {
    Craftsman {
        id: record.id.to_owned(),
        display_name: record.display_name.to_owned(),
        description: record.description.to_owned(),
        profile_image_url: record.profile_image_url.to_owned(),
        prefecture: record.prefecture.to_owned(),
        city: record.city.to_owned(),
        category: ServiceCategory::from(record.category.to_owned()),
        price_min: record.price_min,
        price_max: record.price_max,
        rating_avg: record.rating_avg,
        review_count: record.review_count,
        experience_years: record.experience_years,
        qualifications: record.qualifications.to_owned(),
    }
}

fn review_from_record(record: &demo_data::ReviewRecord) -> Option<Review> {
    let created_at = match NaiveDate::parse_from_str(record.created_at, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            debug!(review_id = record.id, date = record.created_at, "unparseable review date");
            return None;
        }
    };
    Some(Review {
        id: record.id.to_owned(),
        craftsman_id: record.craftsman_id.to_owned(),
        customer_name: record.customer_name.to_owned(),
        rating: record.rating,
        comment: record.comment.to_owned(),
        created_at,
    })
}

fn job_from_record(record: &demo_data::JobRecord) -> Job {
    Job {
        id: record.id.to_owned(),
        craftsman_id: record.craftsman_id.to_owned(),
        craftsman_name: record.craftsman_name.to_owned(),
        customer_id: record.customer_id.to_owned(),
        customer_name: record.customer_name.to_owned(),
        customer_phone: record.customer_phone.to_owned(),
        customer_email: record.customer_email.to_owned(),
        customer_address: record.customer_address.to_owned(),
        service: record.service.to_owned(),
        preferred_date: record.preferred_date.clone(),
        preferred_time: record.preferred_time.to_owned(),
        notes: record.notes.to_owned(),
        status: match record.status {
            JobSeedStatus::Pending => JobStatus::Pending,
            JobSeedStatus::Confirmed => JobStatus::Confirmed,
        },
        created_at: record.created_at,
        confirmed_at: record.confirmed_at,
    }
}

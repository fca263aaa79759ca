//! Booking and job lifecycle service.
//!
//! Every status change funnels through [`JobLifecycleService::transition`],
//! which checks the actor's role, their ownership of the job, and the
//! job's current status before touching the store. A failed check returns
//! [`Error::PreconditionFailed`] without issuing any write.

use std::sync::Arc;

use mockable::Clock;
use tracing::{error, info};

use super::error::Error;
use super::identity::{Identity, Role};
use super::job::{BookingRequest, Job, JobAction, JobPatch, JobStatus, NewJob};
use super::ports::MarketRepository;

/// Who is attempting a lifecycle transition.
///
/// For craftsmen the id is the craftsman record id, not the session id,
/// so it compares directly against `Job::craftsman_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// Id the actor owns jobs under.
    pub id: String,
    /// Side of the marketplace.
    pub role: Role,
}

/// Service driving booking and the job status machine.
pub struct JobLifecycleService<R: ?Sized> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: MarketRepository + ?Sized> JobLifecycleService<R> {
    /// Build the service over a repository and a clock.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// File a new job request as the signed-in customer.
    ///
    /// The request is validated before any network call; the craftsman
    /// must exist. New jobs always start `pending` with no confirmation
    /// time.
    ///
    /// # Errors
    ///
    /// [`Error::PreconditionFailed`] when the identity is not a customer,
    /// [`Error::Validation`] when the form is incomplete,
    /// [`Error::NotFound`] when the craftsman id matches nothing, and
    /// [`Error::Transport`] when the store cannot be reached.
    pub async fn book(&self, identity: &Identity, request: &BookingRequest) -> Result<Job, Error> {
        if identity.role != Role::Customer {
            return Err(Error::precondition_failed(
                "only customers can file job requests",
            ));
        }
        request.validate()?;
        let craftsman = self.repo.get_craftsman(&request.craftsman_id).await?;
        let new_job = NewJob {
            craftsman_id: craftsman.id.clone(),
            craftsman_name: craftsman.display_name.clone(),
            customer_id: identity.actor().id,
            customer_name: request.contact.name.clone(),
            customer_phone: request.contact.phone.clone(),
            customer_email: request.contact.email.clone(),
            customer_address: request.contact.address.clone(),
            service: request.service.clone(),
            preferred_date: request.preferred_date.clone(),
            preferred_time: request.preferred_time.clone(),
            notes: request.notes.clone(),
            status: JobStatus::Pending,
            confirmed_at: None,
        };
        let job = self.repo.create_job(&new_job).await?;
        info!(job_id = %job.id, craftsman_id = %job.craftsman_id, "job request filed");
        Ok(job)
    }

    /// Move a job along one edge of the status machine.
    ///
    /// The `pending → confirmed` edge stamps `confirmed_at` from the
    /// service clock; no other edge touches it, so once set it survives
    /// the rest of the lifecycle.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the job id matches nothing, and
    /// [`Error::PreconditionFailed`] when the actor's role is wrong, the
    /// actor does not own the job, or the job is not in the edge's source
    /// status. Precondition failures leave persisted state untouched.
    pub async fn transition(
        &self,
        actor: &Actor,
        job_id: &str,
        action: JobAction,
    ) -> Result<Job, Error> {
        let job = self.repo.get_job(job_id).await?;
        Self::check_preconditions(actor, &job, action)?;

        let patch = JobPatch {
            status: Some(action.target_status()),
            confirmed_at: match action {
                JobAction::Confirm => Some(self.clock.utc()),
                _ => None,
            },
        };
        let updated = self.repo.update_job(job_id, &patch).await.map_err(|err| {
            error!(job_id, action = action.verb(), %err, "status update failed");
            Error::from(err)
        })?;
        info!(
            job_id,
            action = action.verb(),
            from = ?job.status,
            to = ?updated.status,
            "job transitioned"
        );
        Ok(updated)
    }

    fn check_preconditions(actor: &Actor, job: &Job, action: JobAction) -> Result<(), Error> {
        if actor.role != action.required_role() {
            return Err(Error::precondition_failed(format!(
                "only a {} can {} a job",
                action.required_role().as_str(),
                action.verb(),
            )));
        }
        let owner = match actor.role {
            Role::Craftsman => &job.craftsman_id,
            Role::Customer => &job.customer_id,
        };
        if actor.id != *owner {
            return Err(Error::precondition_failed(format!(
                "job {} does not belong to this {}",
                job.id,
                actor.role.as_str(),
            )));
        }
        if job.status != action.source_status() {
            return Err(Error::precondition_failed(format!(
                "cannot {} a job in status {:?}",
                action.verb(),
                job.status,
            )));
        }
        Ok(())
    }
}

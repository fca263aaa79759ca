//! Job entity and its status lifecycle.
//!
//! The lifecycle is a fixed five-state machine: `pending` can move to
//! `confirmed`, `rejected`, or `cancelled`; `confirmed` can move to
//! `completed`; every other state is terminal. The legal edges, the role
//! allowed to trigger each one, and the `confirmed_at` rule are all
//! encoded here so the service layer and tests share one source of truth.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::Error;
use super::identity::Role;

/// Lifecycle status of a job request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Filed by the customer, awaiting the craftsman's decision.
    Pending,
    /// Accepted by the craftsman.
    Confirmed,
    /// Declined by the craftsman. Terminal.
    Rejected,
    /// Work finished. Terminal.
    Completed,
    /// Withdrawn by the customer. Terminal.
    Cancelled,
}

impl JobStatus {
    /// Whether the status has no outgoing transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Completed | Self::Cancelled)
    }

    /// Label shown to customers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "依頼中",
            Self::Confirmed => "確定",
            Self::Rejected => "却下",
            Self::Completed => "完了",
            Self::Cancelled => "キャンセル",
        }
    }

    /// Label shown to craftsmen, who see a pending job as an open
    /// consultation rather than an outgoing request.
    #[must_use]
    pub fn craftsman_label(self) -> &'static str {
        match self {
            Self::Pending => "相談中",
            other => other.label(),
        }
    }
}

/// A named, role-gated edge of the status machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobAction {
    /// Craftsman accepts a pending job.
    Confirm,
    /// Craftsman declines a pending job.
    Reject,
    /// Craftsman marks a confirmed job as done.
    Complete,
    /// Customer withdraws a pending job.
    Cancel,
}

impl JobAction {
    /// Role allowed to trigger this edge.
    #[must_use]
    pub fn required_role(self) -> Role {
        match self {
            Self::Confirm | Self::Reject | Self::Complete => Role::Craftsman,
            Self::Cancel => Role::Customer,
        }
    }

    /// Status the job must currently hold.
    #[must_use]
    pub fn source_status(self) -> JobStatus {
        match self {
            Self::Confirm | Self::Reject | Self::Cancel => JobStatus::Pending,
            Self::Complete => JobStatus::Confirmed,
        }
    }

    /// Status the edge moves the job into.
    #[must_use]
    pub fn target_status(self) -> JobStatus {
        match self {
            Self::Confirm => JobStatus::Confirmed,
            Self::Reject => JobStatus::Rejected,
            Self::Complete => JobStatus::Completed,
            Self::Cancel => JobStatus::Cancelled,
        }
    }

    /// Verb used in precondition failure messages and logs.
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::Reject => "reject",
            Self::Complete => "complete",
            Self::Cancel => "cancel",
        }
    }
}

/// One customer's service request, tracked through the status lifecycle.
///
/// ## Invariants
/// - `confirmed_at` is non-null iff the status has ever reached
///   `confirmed`; once set it is never cleared by later transitions.
/// - Jobs are never physically deleted; cancellation is a status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Opaque record id assigned by the store.
    pub id: String,
    /// Assigned craftsman record id.
    pub craftsman_id: String,
    /// Denormalised craftsman display name.
    pub craftsman_name: String,
    /// Requesting customer id.
    pub customer_id: String,
    /// Customer display name as entered on the booking form.
    pub customer_name: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Customer email address.
    pub customer_email: String,
    /// Work-site address.
    pub customer_address: String,
    /// Requested service text.
    pub service: String,
    /// Preferred visit date, `YYYY-MM-DD`.
    pub preferred_date: String,
    /// Preferred visit time, `HH:MM`.
    pub preferred_time: String,
    /// Free-text notes.
    pub notes: String,
    /// Current lifecycle status.
    pub status: JobStatus,
    /// Creation time, assigned by the store.
    pub created_at: DateTime<Utc>,
    /// Time of the `pending → confirmed` edge, if it ever happened.
    #[serde(default)]
    pub confirmed_at: Option<DateTime<Utc>>,
}

/// Customer contact details captured on the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerContact {
    /// Name to show the craftsman.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Work-site address.
    pub address: String,
}

/// A customer's booking form, validated before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// Craftsman the request is addressed to.
    pub craftsman_id: String,
    /// Requested service text.
    pub service: String,
    /// Preferred visit date, `YYYY-MM-DD`.
    pub preferred_date: String,
    /// Preferred visit time, `HH:MM`.
    pub preferred_time: String,
    /// Free-text notes.
    pub notes: String,
    /// Contact details for the job.
    pub contact: CustomerContact,
}

impl BookingRequest {
    /// Enforce the form's required fields. Resolved entirely client-side;
    /// a failing request is never sent to the server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the offending field.
    pub fn validate(&self) -> Result<(), Error> {
        if self.service.trim().is_empty() {
            return Err(Error::validation(
                "service",
                "サービス内容を選択してください",
            ));
        }
        Ok(())
    }
}

/// Wire payload for creating a job. Built by the lifecycle service; the
/// store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewJob {
    /// Assigned craftsman record id.
    pub craftsman_id: String,
    /// Denormalised craftsman display name.
    pub craftsman_name: String,
    /// Requesting customer id.
    pub customer_id: String,
    /// Customer display name.
    pub customer_name: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Customer email address.
    pub customer_email: String,
    /// Work-site address.
    pub customer_address: String,
    /// Requested service text.
    pub service: String,
    /// Preferred visit date.
    pub preferred_date: String,
    /// Preferred visit time.
    pub preferred_time: String,
    /// Free-text notes.
    pub notes: String,
    /// Always [`JobStatus::Pending`] for a new request.
    pub status: JobStatus,
    /// Always absent for a new request.
    pub confirmed_at: Option<DateTime<Utc>>,
}

/// Partial update applied on a status transition. Fields left `None` are
/// not touched, so `confirmed_at` can only ever be set, never cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct JobPatch {
    /// New lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    /// Confirmation time, set on the `pending → confirmed` edge only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<DateTime<Utc>>,
}

/// Equality filters for listing jobs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobFilter {
    /// Keep only jobs assigned to this craftsman.
    pub craftsman_id: Option<String>,
    /// Keep only jobs filed by this customer.
    pub customer_id: Option<String>,
}

impl JobFilter {
    /// Jobs assigned to a craftsman.
    #[must_use]
    pub fn for_craftsman(id: impl Into<String>) -> Self {
        Self {
            craftsman_id: Some(id.into()),
            customer_id: None,
        }
    }

    /// Jobs filed by a customer.
    #[must_use]
    pub fn for_customer(id: impl Into<String>) -> Self {
        Self {
            craftsman_id: None,
            customer_id: Some(id.into()),
        }
    }

    /// Whether a job passes the filters.
    #[must_use]
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(craftsman_id) = &self.craftsman_id {
            if job.craftsman_id != *craftsman_id {
                return false;
            }
        }
        if let Some(customer_id) = &self.customer_id {
            if job.customer_id != *customer_id {
                return false;
            }
        }
        true
    }
}

/// Per-status counts over a job list, as shown on the dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JobStatusSummary {
    /// Jobs awaiting a decision.
    pub pending: usize,
    /// Accepted jobs.
    pub confirmed: usize,
    /// Declined jobs.
    pub rejected: usize,
    /// Finished jobs.
    pub completed: usize,
    /// Withdrawn jobs.
    pub cancelled: usize,
}

impl JobStatusSummary {
    /// Count jobs per status.
    #[must_use]
    pub fn of(jobs: &[Job]) -> Self {
        let mut summary = Self::default();
        for job in jobs {
            match job.status {
                JobStatus::Pending => summary.pending += 1,
                JobStatus::Confirmed => summary.confirmed += 1,
                JobStatus::Rejected => summary.rejected += 1,
                JobStatus::Completed => summary.completed += 1,
                JobStatus::Cancelled => summary.cancelled += 1,
            }
        }
        summary
    }

    /// Total number of jobs counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.pending + self.confirmed + self.rejected + self.completed + self.cancelled
    }
}

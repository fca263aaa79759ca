//! Customer reviews of craftsmen.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Equality filter for listing reviews.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewFilter {
    /// Keep only reviews of this craftsman.
    pub craftsman_id: Option<String>,
}

impl ReviewFilter {
    /// Reviews of a single craftsman.
    #[must_use]
    pub fn for_craftsman(id: impl Into<String>) -> Self {
        Self {
            craftsman_id: Some(id.into()),
        }
    }

    /// Whether a review passes the filter.
    #[must_use]
    pub fn matches(&self, review: &Review) -> bool {
        self.craftsman_id
            .as_ref()
            .is_none_or(|id| review.craftsman_id == *id)
    }
}

/// A customer's review of a completed job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Opaque record id.
    pub id: String,
    /// Reviewed craftsman record id.
    pub craftsman_id: String,
    /// Reviewer display name.
    pub customer_name: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Review body.
    pub comment: String,
    /// Posting date.
    pub created_at: NaiveDate,
}

//! Persisted chat messages scoped to a job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::Role;

/// A persisted message in a job's conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Opaque record id assigned by the store.
    pub id: String,
    /// Conversation the message belongs to.
    pub job_id: String,
    /// Sending side.
    pub sender: Role,
    /// Sender display name at send time.
    pub sender_name: String,
    /// Message body.
    pub message: String,
    /// Send time, assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// Wire payload for sending a message. The store assigns `id` and
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    /// Conversation to append to.
    pub job_id: String,
    /// Sending side.
    pub sender: Role,
    /// Sender display name.
    pub sender_name: String,
    /// Message body, already trimmed.
    pub message: String,
}

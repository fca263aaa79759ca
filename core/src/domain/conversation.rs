//! Per-job chat with optimistic sends.
//!
//! Sending is two-phase: the entry appears immediately under a
//! provisional id, then swaps in place to the server-assigned record on
//! success. On failure the entry is removed and the draft restored, so
//! nothing in the transcript ever claims a persistence the store did not
//! acknowledge.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::{error, warn};
use uuid::Uuid;

use demo_data::DemoRole;

use super::error::Error;
use super::identity::{Identity, Role};
use super::message::NewMessage;
use super::ports::MarketRepository;

/// Where a transcript entry came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOrigin {
    /// Scripted opener, never persisted.
    Seed,
    /// Optimistically inserted, awaiting the store's acknowledgement.
    Provisional {
        /// Locally generated placeholder id.
        temp_id: String,
    },
    /// Acknowledged by the store.
    Confirmed {
        /// Server-assigned record id.
        id: String,
    },
}

/// One entry of a job's transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    /// Sending side.
    pub sender: Role,
    /// Sender display name.
    pub sender_name: String,
    /// Message body.
    pub body: String,
    /// Send time used for ordering.
    pub sent_at: DateTime<Utc>,
    /// Provenance of the entry.
    pub origin: ChatOrigin,
}

/// An open conversation: merged transcript plus the unsent draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    /// Job the conversation belongs to.
    pub job_id: String,
    /// Transcript in ascending send order. Ties keep insertion order, so
    /// seeds stay ahead of persisted messages with equal timestamps.
    pub entries: Vec<ChatEntry>,
    /// Unsent draft text.
    pub draft: String,
}

/// Service opening conversations and sending messages.
pub struct ConversationService<R: ?Sized> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: MarketRepository + ?Sized> ConversationService<R> {
    /// Build the service over a repository and a clock.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Open a job's conversation: the scripted seed script merged with
    /// whatever the store holds, ordered by send time.
    ///
    /// A store failure degrades the transcript to the seed script alone
    /// rather than failing the open; the degradation is logged.
    pub async fn open(&self, job_id: &str) -> Conversation {
        let now = self.clock.utc();
        let mut entries: Vec<ChatEntry> = demo_data::seed_messages(now)
            .into_iter()
            .map(|seed| ChatEntry {
                sender: match seed.sender {
                    DemoRole::Craftsman => Role::Craftsman,
                    DemoRole::Customer => Role::Customer,
                },
                sender_name: seed.sender_name.to_owned(),
                body: seed.body.to_owned(),
                sent_at: seed.sent_at,
                origin: ChatOrigin::Seed,
            })
            .collect();

        match self.repo.list_messages(job_id).await {
            Ok(messages) => {
                entries.extend(messages.into_iter().map(|message| ChatEntry {
                    sender: message.sender,
                    sender_name: message.sender_name,
                    body: message.message,
                    sent_at: message.created_at,
                    origin: ChatOrigin::Confirmed { id: message.id },
                }));
            }
            Err(err) => {
                warn!(job_id, %err, "message fetch failed; showing seed script only");
            }
        }
        entries.sort_by_key(|entry| entry.sent_at);

        Conversation {
            job_id: job_id.to_owned(),
            entries,
            draft: String::new(),
        }
    }

    /// Send the conversation's draft as the signed-in user.
    ///
    /// A whitespace-only draft is a no-op. Otherwise the entry is
    /// inserted provisionally and the draft cleared before the store is
    /// asked to persist it; on failure both are rolled back and the
    /// error returned.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] when the store refuses or cannot be reached.
    pub async fn send(
        &self,
        conversation: &mut Conversation,
        identity: &Identity,
    ) -> Result<(), Error> {
        let body = conversation.draft.trim().to_owned();
        if body.is_empty() {
            return Ok(());
        }

        let temp_id = format!("temp_{}", Uuid::new_v4().simple());
        conversation.entries.push(ChatEntry {
            sender: identity.role,
            sender_name: identity.name.clone(),
            body: body.clone(),
            sent_at: self.clock.utc(),
            origin: ChatOrigin::Provisional {
                temp_id: temp_id.clone(),
            },
        });
        let draft_backup = std::mem::take(&mut conversation.draft);

        let payload = NewMessage {
            job_id: conversation.job_id.clone(),
            sender: identity.role,
            sender_name: identity.name.clone(),
            message: body,
        };
        let is_ours = |origin: &ChatOrigin| {
            matches!(origin, ChatOrigin::Provisional { temp_id: t } if *t == temp_id)
        };
        match self.repo.create_message(&payload).await {
            Ok(message) => {
                if let Some(entry) = conversation
                    .entries
                    .iter_mut()
                    .find(|entry| is_ours(&entry.origin))
                {
                    entry.origin = ChatOrigin::Confirmed { id: message.id };
                    entry.sent_at = message.created_at;
                }
                Ok(())
            }
            Err(err) => {
                error!(job_id = %conversation.job_id, %err, "message send failed; rolling back");
                conversation.entries.retain(|entry| !is_ours(&entry.origin));
                conversation.draft = draft_backup;
                Err(Error::from(err))
            }
        }
    }
}

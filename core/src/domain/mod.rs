//! Domain model and services.
//!
//! Entities, the outbound repository port, and the services that drive
//! booking, the job status machine, and per-job chat. Nothing here knows
//! which backend is in use.

pub mod conversation;
pub mod craftsman;
pub mod error;
pub mod identity;
pub mod job;
pub mod lifecycle;
pub mod message;
pub mod ports;
pub mod profile;
pub mod review;
pub mod schedule;

pub use conversation::{ChatEntry, ChatOrigin, Conversation, ConversationService};
pub use craftsman::{
    Craftsman, CraftsmanPatch, CraftsmanQuery, CraftsmanSort, CraftsmanSortField, ServiceCategory,
    SortOrder,
};
pub use error::Error;
pub use identity::{ContactProfile, ContactProfilePatch, Identity, Role};
pub use job::{
    BookingRequest, CustomerContact, Job, JobAction, JobFilter, JobPatch, JobStatus,
    JobStatusSummary, NewJob,
};
pub use lifecycle::{Actor, JobLifecycleService};
pub use message::{Message, NewMessage};
pub use ports::{MarketRepository, RepositoryError};
pub use profile::CraftsmanProfileService;
pub use review::{Review, ReviewFilter};

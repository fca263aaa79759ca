//! Marketplace core for a home-repair booking service.
//!
//! Connects customers with craftsmen: a browsable catalogue with
//! filtering and sorting, job requests driven through a fixed status
//! lifecycle, per-job chat with optimistic sends, and a persistent demo
//! session identity. Storage sits behind one repository port with two
//! adapters: the remote REST store and an in-memory fallback seeded from
//! the bundled dataset.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod session;
pub mod util;

pub use config::{AppConfig, ConfigError, app_config_from_env};
pub use domain::{
    Actor, BookingRequest, ChatEntry, ChatOrigin, Conversation, ConversationService, Craftsman,
    CraftsmanPatch, CraftsmanProfileService, CraftsmanQuery, Error, Identity, Job, JobAction,
    JobFilter, JobLifecycleService, JobStatus, JobStatusSummary, MarketRepository, Message, Review,
    ReviewFilter, Role, ServiceCategory,
};
pub use outbound::{MemoryMarketRepository, RestMarketRepository, market_repository_from_config};
pub use session::{SessionError, SessionStore};

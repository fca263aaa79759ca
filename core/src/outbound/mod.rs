//! Outbound adapters implementing the repository port.

pub mod memory;
pub mod rest;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::ports::MarketRepository;
pub use memory::MemoryMarketRepository;
pub use rest::RestMarketRepository;

/// Pick the repository backend from configuration: the REST store when a
/// base URL is configured, the seeded in-memory fallback otherwise. A
/// client that fails to construct also falls back, with a warning.
#[must_use]
pub fn market_repository_from_config(
    config: &AppConfig,
    now: DateTime<Utc>,
) -> Arc<dyn MarketRepository> {
    match &config.api_base_url {
        Some(base_url) => match RestMarketRepository::new(base_url.clone()) {
            Ok(repo) => {
                info!(%base_url, "using remote marketplace store");
                Arc::new(repo)
            }
            Err(err) => {
                warn!(%err, "HTTP client construction failed; using offline fallback");
                Arc::new(MemoryMarketRepository::seeded(now))
            }
        },
        None => {
            info!("no API base URL configured; using offline fallback");
            Arc::new(MemoryMarketRepository::seeded(now))
        }
    }
}

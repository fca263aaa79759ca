//! Static demo dataset backing the marketplace's offline fallback mode.
//!
//! When no remote API endpoint is configured, the core crate serves reads
//! from this dataset and confines mutations to the demo records defined
//! here. Everything demo-flavoured — seed craftsmen and reviews, scripted
//! chat messages, demo accounts, and the demo-id predicate — lives in this
//! crate so the carve-out never leaks into business logic.

mod dataset;
mod demo;

pub use dataset::{CraftsmanRecord, ReviewRecord, craftsmen, reviews};
pub use demo::{
    DEMO_ID_PREFIX, DemoAccount, DemoRole, JobRecord, JobSeedStatus, SeedMessage,
    demo_craftsman_accounts, demo_customer_accounts, demo_jobs, is_demo_id, seed_messages,
};

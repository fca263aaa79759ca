//! Demo accounts, demo jobs, and the scripted chat seed.
//!
//! Records in this module are the only ones the fallback backend will
//! mutate; everything else in the dataset is read-only. The shared id
//! prefix keeps the carve-out detectable with a single predicate.

use chrono::{DateTime, Duration, Utc};

/// Prefix shared by every mutable demo record id.
pub const DEMO_ID_PREFIX: &str = "demo_";

/// Whether a record id belongs to the mutable demo carve-out.
#[must_use]
pub fn is_demo_id(id: &str) -> bool {
    id.starts_with(DEMO_ID_PREFIX)
}

/// Role a demo account logs in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoRole {
    /// Service-provider side of the marketplace.
    Craftsman,
    /// Requesting side of the marketplace.
    Customer,
}

/// A one-click demo login account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    /// Session identity id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Role the account assumes.
    pub role: DemoRole,
    /// Linked craftsman record, for craftsman accounts.
    pub craftsman_id: Option<&'static str>,
    /// Short blurb shown on the login screen.
    pub description: &'static str,
}

/// Demo craftsman accounts.
#[must_use]
pub fn demo_craftsman_accounts() -> &'static [DemoAccount] {
    &[DemoAccount {
        id: "demo_craftsman_taro",
        name: "職人太郎",
        role: DemoRole::Craftsman,
        craftsman_id: Some("1"),
        description: "山田エアコンサービス（エアコン専門）",
    }]
}

/// Demo customer accounts.
#[must_use]
pub fn demo_customer_accounts() -> &'static [DemoAccount] {
    &[DemoAccount {
        id: "demo_customer_taro",
        name: "依頼者太郎",
        role: DemoRole::Customer,
        craftsman_id: None,
        description: "デモ用のお客様アカウント",
    }]
}

/// Status a demo job is seeded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSeedStatus {
    /// Awaiting the craftsman's decision.
    Pending,
    /// Confirmed by the craftsman.
    Confirmed,
}

/// A job record seeded into the fallback backend.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    /// Demo record id, always satisfying [`is_demo_id`].
    pub id: &'static str,
    /// Assigned craftsman record id.
    pub craftsman_id: &'static str,
    /// Denormalised craftsman display name.
    pub craftsman_name: &'static str,
    /// Requesting demo customer id.
    pub customer_id: &'static str,
    /// Denormalised customer contact fields.
    pub customer_name: &'static str,
    /// Customer phone number.
    pub customer_phone: &'static str,
    /// Customer email address.
    pub customer_email: &'static str,
    /// Work-site address.
    pub customer_address: &'static str,
    /// Requested service text.
    pub service: &'static str,
    /// Preferred visit date, `YYYY-MM-DD`.
    pub preferred_date: String,
    /// Preferred visit time, `HH:MM`.
    pub preferred_time: &'static str,
    /// Free-text notes.
    pub notes: &'static str,
    /// Seeded lifecycle status.
    pub status: JobSeedStatus,
    /// Request creation time.
    pub created_at: DateTime<Utc>,
    /// Confirmation time, for jobs seeded as confirmed.
    pub confirmed_at: Option<DateTime<Utc>>,
}

/// Demo jobs, with dates anchored to the supplied instant so the seeded
/// calendar always shows near-future work.
#[must_use]
pub fn demo_jobs(now: DateTime<Utc>) -> Vec<JobRecord> {
    let date_in = |days: i64| (now + Duration::days(days)).format("%Y-%m-%d").to_string();
    vec![
        JobRecord {
            id: "demo_job_1",
            craftsman_id: "1",
            craftsman_name: "山田エアコンサービス",
            customer_id: "demo_customer_taro",
            customer_name: "依頼者太郎",
            customer_phone: "090-1234-5678",
            customer_email: "taro@example.com",
            customer_address: "東京都渋谷区神南1-2-3",
            service: "エアコン取り付け",
            preferred_date: date_in(3),
            preferred_time: "10:00",
            notes: "6畳の寝室に新設をお願いします。",
            status: JobSeedStatus::Pending,
            created_at: now - Duration::days(1),
            confirmed_at: None,
        },
        JobRecord {
            id: "demo_job_2",
            craftsman_id: "1",
            craftsman_name: "山田エアコンサービス",
            customer_id: "demo_customer_taro",
            customer_name: "依頼者太郎",
            customer_phone: "090-1234-5678",
            customer_email: "taro@example.com",
            customer_address: "東京都渋谷区神南1-2-3",
            service: "エアコンクリーニング",
            preferred_date: date_in(7),
            preferred_time: "14:00",
            notes: "",
            status: JobSeedStatus::Confirmed,
            created_at: now - Duration::days(3),
            confirmed_at: Some(now - Duration::days(2)),
        },
        JobRecord {
            id: "demo_job_3",
            craftsman_id: "2",
            craftsman_name: "佐藤設備工業",
            customer_id: "demo_customer_taro",
            customer_name: "依頼者太郎",
            customer_phone: "090-1234-5678",
            customer_email: "taro@example.com",
            customer_address: "東京都渋谷区神南1-2-3",
            service: "水漏れ修理",
            preferred_date: date_in(2),
            preferred_time: "09:00",
            notes: "キッチンのシンク下から水が漏れています。",
            status: JobSeedStatus::Pending,
            created_at: now - Duration::hours(6),
            confirmed_at: None,
        },
    ]
}

/// A scripted conversation opener shown ahead of persisted messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedMessage {
    /// Sending side, `craftsman` or `customer`.
    pub sender: DemoRole,
    /// Display name used for the scripted sender.
    pub sender_name: &'static str,
    /// Message body.
    pub body: &'static str,
    /// Timestamp, anchored relative to the supplied instant.
    pub sent_at: DateTime<Utc>,
}

/// The three scripted messages every job conversation opens with.
#[must_use]
pub fn seed_messages(now: DateTime<Utc>) -> Vec<SeedMessage> {
    vec![
        SeedMessage {
            sender: DemoRole::Customer,
            sender_name: "お客様",
            body: "こんにちは。お見積もりの件でご相談したいのですが、お時間よろしいでしょうか？",
            sent_at: now - Duration::hours(2),
        },
        SeedMessage {
            sender: DemoRole::Craftsman,
            sender_name: "職人",
            body: "お問い合わせありがとうございます。はい、お見積もりについてご説明いたします。",
            sent_at: now - Duration::hours(1),
        },
        SeedMessage {
            sender: DemoRole::Customer,
            sender_name: "お客様",
            body: "ありがとうございます。作業時間はどのくらいかかりますか？",
            sent_at: now - Duration::minutes(30),
        },
    ]
}

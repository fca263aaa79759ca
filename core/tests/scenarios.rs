//! End-to-end scenarios against the offline fallback backend.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use mockable::{Clock, MockClock};

use shokunin_core::domain::craftsman::{CraftsmanSortField, SortOrder};
use shokunin_core::domain::identity::ContactProfile;
use shokunin_core::domain::schedule::jobs_by_date;
use shokunin_core::{
    Actor, BookingRequest, ChatOrigin, ConversationService, CraftsmanQuery, Error, Identity,
    JobAction, JobFilter, JobLifecycleService, JobStatus, JobStatusSummary, MarketRepository,
    MemoryMarketRepository, Role, ServiceCategory,
};

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 30, 9, 0, 0).single().expect("valid anchor")
}

fn frozen_clock(now: DateTime<Utc>) -> Arc<dyn Clock> {
    let mut clock = MockClock::new();
    clock.expect_utc().returning(move || now);
    Arc::new(clock)
}

fn repo() -> Arc<MemoryMarketRepository> {
    Arc::new(MemoryMarketRepository::seeded(anchor()))
}

fn craftsman_taro() -> Identity {
    Identity {
        id: "demo_craftsman_taro".to_owned(),
        name: "職人太郎".to_owned(),
        role: Role::Craftsman,
        craftsman_id: Some("1".to_owned()),
        profile: ContactProfile::default(),
    }
}

fn customer_taro() -> Identity {
    Identity {
        id: "demo_customer_taro".to_owned(),
        name: "依頼者太郎".to_owned(),
        role: Role::Customer,
        craftsman_id: None,
        profile: ContactProfile::default(),
    }
}

#[tokio::test]
async fn craftsman_confirms_then_completes_a_demo_job() {
    let repo = repo();
    let service = JobLifecycleService::new(Arc::clone(&repo), frozen_clock(anchor()));
    let actor = craftsman_taro().actor();

    let confirmed = service
        .transition(&actor, "demo_job_1", JobAction::Confirm)
        .await
        .expect("confirm succeeds");
    assert_eq!(confirmed.status, JobStatus::Confirmed);
    assert_eq!(confirmed.confirmed_at, Some(anchor()));

    let completed = service
        .transition(&actor, "demo_job_1", JobAction::Complete)
        .await
        .expect("complete succeeds");
    assert_eq!(completed.status, JobStatus::Completed);
    // The confirmation stamp survives completion.
    assert_eq!(completed.confirmed_at, Some(anchor()));

    let err = service
        .transition(&actor, "demo_job_1", JobAction::Confirm)
        .await
        .expect_err("completed jobs cannot be re-confirmed");
    assert!(matches!(err, Error::PreconditionFailed { .. }));
}

#[tokio::test]
async fn customer_cancels_and_the_job_is_terminal() {
    let repo = repo();
    let service = JobLifecycleService::new(Arc::clone(&repo), frozen_clock(anchor()));

    let cancelled = service
        .transition(&customer_taro().actor(), "demo_job_3", JobAction::Cancel)
        .await
        .expect("cancel succeeds");
    assert_eq!(cancelled.status, JobStatus::Cancelled);
    assert!(cancelled.confirmed_at.is_none());

    let other_craftsman = Actor {
        id: "2".to_owned(),
        role: Role::Craftsman,
    };
    let err = service
        .transition(&other_craftsman, "demo_job_3", JobAction::Complete)
        .await
        .expect_err("cancelled jobs cannot be completed");
    assert!(matches!(err, Error::PreconditionFailed { .. }));
}

#[tokio::test]
async fn a_craftsman_cannot_touch_a_rivals_job() {
    let repo = repo();
    let service = JobLifecycleService::new(Arc::clone(&repo), frozen_clock(anchor()));
    let rival = Actor {
        id: "2".to_owned(),
        role: Role::Craftsman,
    };

    let err = service
        .transition(&rival, "demo_job_1", JobAction::Confirm)
        .await
        .expect_err("job belongs to craftsman 1");
    assert!(matches!(err, Error::PreconditionFailed { .. }));

    let untouched = repo.get_job("demo_job_1").await.expect("job readable");
    assert_eq!(untouched.status, JobStatus::Pending);
}

#[tokio::test]
async fn booking_fails_closed_offline() {
    let repo = repo();
    let service = JobLifecycleService::new(Arc::clone(&repo), frozen_clock(anchor()));
    let request = BookingRequest {
        craftsman_id: "1".to_owned(),
        service: "エアコン取り付け".to_owned(),
        preferred_date: "2026-09-10".to_owned(),
        preferred_time: "10:00".to_owned(),
        notes: String::new(),
        contact: Default::default(),
    };

    let err = service
        .book(&customer_taro(), &request)
        .await
        .expect_err("offline create refused");
    assert!(matches!(err, Error::Transport { .. }));
}

#[tokio::test]
async fn catalogue_filters_and_sorts_offline() {
    let repo = repo();
    let query = CraftsmanQuery::for_category(ServiceCategory::AirConditioning)
        .sorted_by(CraftsmanSortField::RatingAvg, SortOrder::Desc);
    let listed = repo.list_craftsmen(&query).await.expect("listing succeeds");
    assert!(!listed.is_empty());
    assert!(
        listed
            .iter()
            .all(|c| c.category == ServiceCategory::AirConditioning)
    );
    for pair in listed.windows(2) {
        assert!(pair[0].rating_avg >= pair[1].rating_avg);
    }
}

#[tokio::test]
async fn dashboard_summary_counts_the_customers_jobs() {
    let repo = repo();
    let jobs = repo
        .list_jobs(&JobFilter::for_customer("demo_customer_taro"))
        .await
        .expect("listing succeeds");
    let summary = JobStatusSummary::of(&jobs);
    assert_eq!(summary.total(), 3);
    assert_eq!(summary.pending, 2);
    assert_eq!(summary.confirmed, 1);
}

#[tokio::test]
async fn schedule_buckets_the_craftsmans_jobs_by_date() {
    let repo = repo();
    let jobs = repo
        .list_jobs(&JobFilter::for_craftsman("1"))
        .await
        .expect("listing succeeds");
    assert_eq!(jobs.len(), 2);

    let buckets = jobs_by_date(&jobs);
    let in_three_days = (anchor() + Duration::days(3)).date_naive();
    let in_seven_days = (anchor() + Duration::days(7)).date_naive();
    assert_eq!(buckets.get(&in_three_days).map(Vec::len), Some(1));
    assert_eq!(buckets.get(&in_seven_days).map(Vec::len), Some(1));
}

#[tokio::test]
async fn chat_opens_with_the_seed_script_and_rolls_back_failed_sends() {
    let repo = repo();
    let service = ConversationService::new(Arc::clone(&repo), frozen_clock(anchor()));

    let mut conversation = service.open("demo_job_1").await;
    assert_eq!(conversation.entries.len(), 3);
    assert!(
        conversation
            .entries
            .iter()
            .all(|entry| entry.origin == ChatOrigin::Seed)
    );

    conversation.draft = "よろしくお願いします".to_owned();
    let err = service
        .send(&mut conversation, &customer_taro())
        .await
        .expect_err("offline send refused");
    assert!(matches!(err, Error::Transport { .. }));
    assert_eq!(conversation.entries.len(), 3);
    assert_eq!(conversation.draft, "よろしくお願いします");
}

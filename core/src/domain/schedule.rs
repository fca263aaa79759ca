//! Calendar bucketing for the craftsman schedule view.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use tracing::debug;

use super::job::Job;

/// Bucket jobs by preferred visit date.
///
/// Jobs whose `preferred_date` does not parse as `YYYY-MM-DD` are
/// skipped rather than failing the whole view.
#[must_use]
pub fn jobs_by_date(jobs: &[Job]) -> BTreeMap<NaiveDate, Vec<Job>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Job>> = BTreeMap::new();
    for job in jobs {
        match NaiveDate::parse_from_str(&job.preferred_date, "%Y-%m-%d") {
            Ok(date) => buckets.entry(date).or_default().push(job.clone()),
            Err(_) => {
                debug!(job_id = %job.id, date = %job.preferred_date, "unparseable preferred date");
            }
        }
    }
    buckets
}

/// The dates of a calendar month, padded at both ends to full
/// Sunday-through-Saturday week rows.
#[must_use]
pub fn month_grid(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let Some(last) = first
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
    else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_sunday();
    let trail = 6 - last.weekday().num_days_from_sunday();
    let start = first - Duration::days(i64::from(lead));
    let end = last + Duration::days(i64::from(trail));

    let mut grid = Vec::new();
    let mut day = start;
    while day <= end {
        grid.push(day);
        day += Duration::days(1);
    }
    debug_assert_eq!(grid.first().map(NaiveDate::weekday), Some(Weekday::Sun));
    debug_assert_eq!(grid.last().map(NaiveDate::weekday), Some(Weekday::Sat));
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::JobStatus;
    use chrono::Utc;
    use rstest::rstest;

    fn job(id: &str, preferred_date: &str) -> Job {
        Job {
            id: id.to_owned(),
            craftsman_id: "1".to_owned(),
            craftsman_name: String::new(),
            customer_id: "demo_customer_taro".to_owned(),
            customer_name: String::new(),
            customer_phone: String::new(),
            customer_email: String::new(),
            customer_address: String::new(),
            service: String::new(),
            preferred_date: preferred_date.to_owned(),
            preferred_time: "10:00".to_owned(),
            notes: String::new(),
            status: JobStatus::Pending,
            created_at: Utc::now(),
            confirmed_at: None,
        }
    }

    #[test]
    fn jobs_land_in_their_date_bucket() {
        let jobs = vec![
            job("a", "2026-09-01"),
            job("b", "2026-09-01"),
            job("c", "2026-09-03"),
        ];
        let buckets = jobs_by_date(&jobs);
        let sept_1 = NaiveDate::from_ymd_opt(2026, 9, 1).expect("valid date");
        assert_eq!(buckets.get(&sept_1).map(Vec::len), Some(2));
        assert_eq!(buckets.len(), 2);
    }

    #[test]
    fn unparseable_dates_are_skipped() {
        let jobs = vec![job("a", "2026-09-01"), job("b", "next tuesday")];
        let buckets = jobs_by_date(&jobs);
        assert_eq!(buckets.values().map(Vec::len).sum::<usize>(), 1);
    }

    #[rstest]
    // September 2026 runs Tuesday to Wednesday: padded on both ends.
    #[case(2026, 9, 35)]
    // February 2026 runs Sunday to Saturday: no padding at all.
    #[case(2026, 2, 28)]
    // December 2026 runs Tuesday to Thursday and spills into January.
    #[case(2026, 12, 35)]
    fn grid_is_full_weeks_from_sunday_to_saturday(
        #[case] year: i32,
        #[case] month: u32,
        #[case] expected_len: usize,
    ) {
        let grid = month_grid(year, month);
        assert_eq!(grid.len(), expected_len);
        assert_eq!(grid.len() % 7, 0);
        assert_eq!(grid.first().map(NaiveDate::weekday), Some(Weekday::Sun));
        assert_eq!(grid.last().map(NaiveDate::weekday), Some(Weekday::Sat));
        assert!(grid.iter().any(|day| day.month() == month));
    }

    #[test]
    fn invalid_month_yields_an_empty_grid() {
        assert!(month_grid(2026, 13).is_empty());
    }
}

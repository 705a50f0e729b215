//! Reports over a freshly seeded record store

use std::sync::Arc;

use chrono::NaiveDate;
use jc_analysis::{run_report, DateRange, ReportFilter};
use jc_store::{MemoryStore, RecordStore};

fn full_year() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    )
}

#[tokio::test]
async fn seeded_store_produces_the_demo_report() {
    let store = RecordStore::open(Arc::new(MemoryStore::new()), true)
        .await
        .unwrap();

    let report = run_report(&store.jobs(), &full_year(), &ReportFilter::All);

    assert_eq!(report.summary.total_jobs, 3);
    assert!((report.summary.total_cost - 7200.0).abs() < 1e-9);
    assert!((report.summary.total_invoiced - 10500.0).abs() < 1e-9);
    assert!((report.summary.total_profit - 3300.0).abs() < 1e-9);
    assert!((report.summary.average_margin - 31.24).abs() < 0.01);
}

#[tokio::test]
async fn narrow_range_only_sees_overlapping_jobs() {
    let store = RecordStore::open(Arc::new(MemoryStore::new()), true)
        .await
        .unwrap();

    // Only JOB-2024-002 (07-20..07-25) and JOB-2024-001 (07-25..07-26)
    // overlap this window; JOB-2024-003 ended on 07-18.
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 7, 19).unwrap(),
        NaiveDate::from_ymd_opt(2024, 7, 25).unwrap(),
    );
    let report = run_report(&store.jobs(), &range, &ReportFilter::All);
    assert_eq!(report.summary.total_jobs, 2);
}

#[tokio::test]
async fn team_filter_selects_team_jobs_only() {
    let store = RecordStore::open(Arc::new(MemoryStore::new()), true)
        .await
        .unwrap();

    let report = run_report(&store.jobs(), &full_year(), &ReportFilter::team("1"));
    assert_eq!(report.summary.total_jobs, 1);
    assert_eq!(report.jobs[0].id, "JOB-2024-002");
}

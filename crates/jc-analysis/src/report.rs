//! Report assembly
//!
//! Combines the filtered job list, the summary totals and the bucketed
//! cumulative series. Cumulative values are recomputed in full per bucket,
//! which makes the cost/revenue series non-decreasing by construction.

use jc_core::types::format_date;
use jc_models::Job;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filter::{filter_jobs, DateRange, ReportFilter};
use crate::intervals::bucket_boundaries;
use crate::summary::{summarize, Summary};

/// One charted point of the bucketed series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalPoint {
    /// Bucket boundary date, formatted for chart labels
    pub label: String,
    pub cumulative_cost: f64,
    pub cumulative_revenue: f64,
    pub cumulative_profit: f64,
    /// Mean margin of the jobs that completed within this bucket; carries
    /// the previous bucket's value through empty buckets
    pub interval_margin: f64,
}

/// Everything a report view needs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub jobs: Vec<Job>,
    pub summary: Summary,
    pub series: Vec<IntervalPoint>,
}

/// Run the analysis over a snapshot of the job collection.
///
/// Pure: reads the snapshot, produces derived output, mutates nothing.
pub fn run_report(jobs: &[Job], range: &DateRange, filter: &ReportFilter) -> AnalysisReport {
    let filtered = filter_jobs(jobs, range, filter);
    let summary = summarize(&filtered);

    // No qualifying jobs: flat-zero series over the range endpoints rather
    // than an empty chart.
    if filtered.is_empty() {
        let series = [range.start, range.end]
            .into_iter()
            .map(|date| IntervalPoint {
                label: format_date(date),
                cumulative_cost: 0.0,
                cumulative_revenue: 0.0,
                cumulative_profit: 0.0,
                interval_margin: 0.0,
            })
            .collect();
        return AnalysisReport {
            jobs: Vec::new(),
            summary,
            series,
        };
    }

    let boundaries = bucket_boundaries(range);
    debug!(buckets = boundaries.len(), jobs = filtered.len(), "building series");

    let mut series: Vec<IntervalPoint> = Vec::with_capacity(boundaries.len());
    for (index, boundary) in boundaries.iter().enumerate() {
        // Filtered jobs always carry an end date
        let completed: Vec<&Job> = filtered
            .iter()
            .copied()
            .filter(|job| job.end_date.is_some_and(|end| end <= *boundary))
            .collect();

        let cumulative_cost = completed.iter().map(|j| j.cost).sum();
        let cumulative_revenue = completed.iter().map(|j| j.invoiced_amount).sum();
        let cumulative_profit = completed.iter().map(|j| j.profit()).sum();

        // Jobs new to this bucket: ended after the previous boundary
        let new_jobs: Vec<&Job> = completed
            .iter()
            .copied()
            .filter(|job| match index {
                0 => true,
                _ => job
                    .end_date
                    .is_some_and(|end| end > boundaries[index - 1] && end <= *boundary),
            })
            .collect();

        let interval_margin = if new_jobs.is_empty() {
            series.last().map(|p| p.interval_margin).unwrap_or(0.0)
        } else {
            new_jobs.iter().map(|j| j.margin()).sum::<f64>() / new_jobs.len() as f64
        };

        series.push(IntervalPoint {
            label: format_date(*boundary),
            cumulative_cost,
            cumulative_revenue,
            cumulative_profit,
            interval_margin,
        });
    }

    AnalysisReport {
        jobs: filtered.into_iter().cloned().collect(),
        summary,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use jc_models::{Assignee, ClientDetails, JobStatus};

    fn job(id: &str, start: (i32, u32, u32), end: (i32, u32, u32), cost: f64, invoiced: f64) -> Job {
        Job {
            id: id.to_string(),
            assignee: Assignee::employee("1"),
            description: String::new(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2),
            status: JobStatus::Completed,
            cost,
            invoiced_amount: invoiced,
            client: ClientDetails::default(),
            created_at: None,
            updated_at: None,
        }
    }

    fn year_2024() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        )
    }

    /// The demonstration dataset queried over the full year
    fn demo_jobs() -> Vec<Job> {
        vec![
            job("JOB-2024-003", (2024, 7, 15), (2024, 7, 18), 3200.0, 4800.0),
            job("JOB-2024-002", (2024, 7, 20), (2024, 7, 25), 2500.0, 3500.0),
            job("JOB-2024-001", (2024, 7, 25), (2024, 7, 26), 1500.0, 2200.0),
        ]
    }

    #[test]
    fn test_end_to_end_summary() {
        let report = run_report(&demo_jobs(), &year_2024(), &ReportFilter::All);

        assert_eq!(report.summary.total_jobs, 3);
        assert!((report.summary.total_cost - 7200.0).abs() < 1e-9);
        assert!((report.summary.total_invoiced - 10500.0).abs() < 1e-9);
        assert!((report.summary.total_profit - 3300.0).abs() < 1e-9);
        // Mean of 33.33%, 28.57%, 31.82%
        assert!((report.summary.average_margin - 31.2446).abs() < 0.001);
    }

    #[test]
    fn test_series_ends_at_totals() {
        let report = run_report(&demo_jobs(), &year_2024(), &ReportFilter::All);
        let last = report.series.last().unwrap();
        assert!((last.cumulative_cost - 7200.0).abs() < 1e-9);
        assert!((last.cumulative_revenue - 10500.0).abs() < 1e-9);
        assert!((last.cumulative_profit - 3300.0).abs() < 1e-9);
    }

    #[test]
    fn test_cumulative_cost_non_decreasing() {
        let report = run_report(&demo_jobs(), &year_2024(), &ReportFilter::All);
        assert!(report
            .series
            .windows(2)
            .all(|w| w[0].cumulative_cost <= w[1].cumulative_cost));
    }

    #[test]
    fn test_margin_carries_forward_through_empty_buckets() {
        let report = run_report(&demo_jobs(), &year_2024(), &ReportFilter::All);

        // All jobs end in July; the trailing buckets repeat the last margin
        let last_two: Vec<f64> = report
            .series
            .iter()
            .rev()
            .take(2)
            .map(|p| p.interval_margin)
            .collect();
        assert_eq!(last_two[0], last_two[1]);
        assert!(last_two[0] > 0.0);

        // Buckets before any job completes report zero margin
        assert_eq!(report.series[0].interval_margin, 0.0);
    }

    #[test]
    fn test_no_jobs_yields_flat_two_point_series() {
        let range = year_2024();
        let report = run_report(&[], &range, &ReportFilter::All);

        assert_eq!(report.summary.total_jobs, 0);
        assert_eq!(report.series.len(), 2);
        assert_eq!(report.series[0].label, "2024-01-01");
        assert_eq!(report.series[1].label, "2024-12-31");
        assert!(report.series.iter().all(|p| p.cumulative_cost == 0.0
            && p.cumulative_revenue == 0.0
            && p.cumulative_profit == 0.0
            && p.interval_margin == 0.0));
    }

    #[test]
    fn test_zero_invoiced_never_produces_nan() {
        let jobs = vec![job("J1", (2024, 2, 1), (2024, 2, 3), 500.0, 0.0)];
        let report = run_report(&jobs, &year_2024(), &ReportFilter::All);

        assert!(report.summary.average_margin.is_finite());
        assert!(report.series.iter().all(|p| p.interval_margin.is_finite()));
    }

    #[test]
    fn test_filtered_out_jobs_do_not_contribute() {
        let mut jobs = demo_jobs();
        jobs.push(job("J-TEAM", (2024, 7, 1), (2024, 7, 2), 9999.0, 9999.0));
        jobs.last_mut().unwrap().assignee = Assignee::team("1");

        let report = run_report(&jobs, &year_2024(), &ReportFilter::employee("1"));
        assert_eq!(report.summary.total_jobs, 3);
        assert!((report.summary.total_cost - 7200.0).abs() < 1e-9);
    }
}

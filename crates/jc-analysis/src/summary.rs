//! Summary metrics over a filtered job set

use jc_models::Job;
use serde::{Deserialize, Serialize};

/// Totals for the filtered set.
///
/// `average_margin` is the arithmetic mean of per-job margins, NOT the
/// margin of the totals; the two differ whenever job sizes vary and the
/// legacy reports always showed the mean.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_jobs: usize,
    pub total_cost: f64,
    pub total_invoiced: f64,
    pub total_profit: f64,
    pub average_margin: f64,
}

/// Reduce a filtered job set to its summary
pub fn summarize(jobs: &[&Job]) -> Summary {
    let total_cost = jobs.iter().map(|j| j.cost).sum();
    let total_invoiced = jobs.iter().map(|j| j.invoiced_amount).sum();
    let total_profit = jobs.iter().map(|j| j.profit()).sum();
    let average_margin = if jobs.is_empty() {
        0.0
    } else {
        jobs.iter().map(|j| j.margin()).sum::<f64>() / jobs.len() as f64
    };

    Summary {
        total_jobs: jobs.len(),
        total_cost,
        total_invoiced,
        total_profit,
        average_margin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jc_models::{Assignee, ClientDetails, JobStatus};

    fn job(cost: f64, invoiced: f64) -> Job {
        Job {
            id: String::new(),
            assignee: Assignee::employee("1"),
            description: String::new(),
            start_date: None,
            end_date: None,
            status: JobStatus::Pending,
            cost,
            invoiced_amount: invoiced,
            client: ClientDetails::default(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_set() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_jobs, 0);
        assert_eq!(summary.average_margin, 0.0);
    }

    #[test]
    fn test_profit_identity() {
        let a = job(100.0, 200.0);
        let b = job(900.0, 1000.0);
        let summary = summarize(&[&a, &b]);
        assert!((summary.total_profit - (summary.total_invoiced - summary.total_cost)).abs() < 1e-9);
    }

    #[test]
    fn test_average_margin_is_mean_of_margins_not_profit_ratio() {
        // 50% and 10% margins on very different job sizes
        let a = job(100.0, 200.0);
        let b = job(900.0, 1000.0);
        let summary = summarize(&[&a, &b]);

        assert!((summary.average_margin - 30.0).abs() < 1e-9);

        let profit_ratio_margin = summary.total_profit / summary.total_invoiced * 100.0;
        assert!((profit_ratio_margin - 16.666666666666668).abs() < 1e-9);
        assert!((summary.average_margin - profit_ratio_margin).abs() > 1.0);
    }

    #[test]
    fn test_zero_invoiced_contributes_zero_margin() {
        let a = job(500.0, 0.0);
        let summary = summarize(&[&a]);
        assert_eq!(summary.average_margin, 0.0);
        assert!(summary.average_margin.is_finite());
    }
}

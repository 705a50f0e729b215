//! Job filtering for analysis
//!
//! A job qualifies when its interval overlaps the query range (overlap, not
//! containment) and, when a filter is set, its assignment references the
//! selected employee or team. Jobs with missing dates are skipped, not
//! rejected.

use chrono::NaiveDate;
use jc_models::{Assignee, Job};
use serde::{Deserialize, Serialize};

/// Inclusive query range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Range length in days, never below 1
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days().max(1)
    }
}

/// Assignment filter for a report
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "filterType", rename_all = "lowercase")]
pub enum ReportFilter {
    #[default]
    All,
    Employee {
        #[serde(rename = "employeeId")]
        employee_id: String,
    },
    Team {
        #[serde(rename = "teamId")]
        team_id: String,
    },
}

impl ReportFilter {
    pub fn employee(id: impl Into<String>) -> Self {
        ReportFilter::Employee {
            employee_id: id.into(),
        }
    }

    pub fn team(id: impl Into<String>) -> Self {
        ReportFilter::Team { team_id: id.into() }
    }

    /// Whether a job's assignment matches this filter (by id)
    pub fn matches(&self, assignee: &Assignee) -> bool {
        match (self, assignee) {
            (ReportFilter::All, _) => true,
            (ReportFilter::Employee { employee_id }, Assignee::Employee { employee_id: id }) => {
                employee_id == id
            }
            (ReportFilter::Team { team_id }, Assignee::Team { team_id: id }) => team_id == id,
            _ => false,
        }
    }
}

/// Select the jobs a report covers.
///
/// Keeps insertion order; clones nothing, the caller decides what to do
/// with the references.
pub fn filter_jobs<'a>(jobs: &'a [Job], range: &DateRange, filter: &ReportFilter) -> Vec<&'a Job> {
    jobs.iter()
        .filter(|job| {
            let (Some(start), Some(end)) = (job.start_date, job.end_date) else {
                return false;
            };
            end >= range.start && start <= range.end && filter.matches(&job.assignee)
        })
        .collect()
}

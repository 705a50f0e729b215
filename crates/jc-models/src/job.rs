//! Job model and related types
//!
//! Jobs are the central entity: one unit of scheduled, billable work,
//! assigned to either an employee or a team.

use chrono::{DateTime, NaiveDate, Utc};
use jc_core::traits::{Entity, Id, Identifiable, Timestamped};
use jc_core::types::{parse_date, RawAmount};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lifecycle state of a job
///
/// No transition table: any status may be set from any other, including
/// reopening a completed job. `Canceled` exists on the legacy surface only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Pending,
    Started,
    Completed,
    Canceled,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Started => "started",
            JobStatus::Completed => "completed",
            JobStatus::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a job is assigned to
///
/// Carries the id of the employee or team (weak reference, lookup only).
/// The enum makes the "exactly one ref, matching the tag" invariant hold by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "assignedTo", rename_all = "lowercase")]
pub enum Assignee {
    Employee {
        #[serde(rename = "employeeId")]
        employee_id: Id,
    },
    Team {
        #[serde(rename = "teamId")]
        team_id: Id,
    },
}

impl Assignee {
    pub fn employee(id: impl Into<Id>) -> Self {
        Assignee::Employee {
            employee_id: id.into(),
        }
    }

    pub fn team(id: impl Into<Id>) -> Self {
        Assignee::Team { team_id: id.into() }
    }

    /// The referenced id, whichever side it is
    pub fn ref_id(&self) -> &str {
        match self {
            Assignee::Employee { employee_id } => employee_id,
            Assignee::Team { team_id } => team_id,
        }
    }
}

/// Client contact details attached to a job
///
/// Opaque strings; no validation beyond presence at the form boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetails {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_phone: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

/// Job entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Id,

    #[serde(flatten)]
    pub assignee: Assignee,

    pub description: String,

    /// Calendar interval of the work; `start_date <= end_date` is enforced
    /// at the form boundary. Jobs with missing dates are excluded from
    /// analysis, not rejected.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    pub status: JobStatus,

    /// Cost in currency units
    pub cost: f64,
    /// Invoiced amount in currency units
    pub invoiced_amount: f64,

    #[serde(flatten)]
    pub client: ClientDetails,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Job {
    /// Derived profit: invoiced amount minus cost
    pub fn profit(&self) -> f64 {
        self.invoiced_amount - self.cost
    }

    /// Derived margin percentage.
    ///
    /// Defined as 0 when the invoiced amount is zero or negative, never
    /// NaN/Infinity.
    pub fn margin(&self) -> f64 {
        if self.invoiced_amount > 0.0 {
            self.profit() / self.invoiced_amount * 100.0
        } else {
            0.0
        }
    }
}

impl Identifiable for Job {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Timestamped for Job {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Entity for Job {
    const COLLECTION: &'static str = "jobs";
    const TYPE_NAME: &'static str = "Job";
}

/// Incoming job data as submitted from a form or a legacy record
///
/// Amounts may be decorated strings, dates may be locale-formatted.
/// `into_job` normalizes everything to the single internal representation;
/// profit and margin are never trusted from input, they are recomputed.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    /// Explicit id; assigned by the store when absent
    #[serde(default)]
    pub id: Option<Id>,

    #[serde(flatten)]
    pub assignee: Assignee,

    #[validate(length(min = 1, message = "can't be blank"))]
    pub description: String,

    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub status: JobStatus,

    #[serde(default)]
    pub cost: Option<RawAmount>,
    #[serde(default)]
    pub invoiced_amount: Option<RawAmount>,

    #[serde(flatten)]
    pub client: ClientDetails,
}

impl JobDraft {
    pub fn new(assignee: Assignee, description: impl Into<String>) -> Self {
        Self {
            id: None,
            assignee,
            description: description.into(),
            start_date: None,
            end_date: None,
            status: JobStatus::default(),
            cost: None,
            invoiced_amount: None,
            client: ClientDetails::default(),
        }
    }

    pub fn parsed_start_date(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(parse_date)
    }

    pub fn parsed_end_date(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_date)
    }

    /// Normalize into a `Job` under the given id
    pub fn into_job(self, id: Id) -> Job {
        let start_date = self.start_date.as_deref().and_then(parse_date);
        let end_date = self.end_date.as_deref().and_then(parse_date);
        Job {
            id,
            assignee: self.assignee,
            description: self.description,
            start_date,
            end_date,
            status: self.status,
            cost: self.cost.map(|a| a.to_amount()).unwrap_or(0.0),
            invoiced_amount: self.invoiced_amount.map(|a| a.to_amount()).unwrap_or(0.0),
            client: self.client,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Partial update for a job; unset fields leave the record unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    #[serde(default)]
    pub assignee: Option<Assignee>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub cost: Option<RawAmount>,
    #[serde(default)]
    pub invoiced_amount: Option<RawAmount>,
    #[serde(default)]
    pub client: Option<ClientDetails>,
}

impl JobPatch {
    /// Shallow-merge into an existing job
    pub fn apply(&self, job: &mut Job) {
        if let Some(assignee) = &self.assignee {
            job.assignee = assignee.clone();
        }
        if let Some(description) = &self.description {
            job.description = description.clone();
        }
        if let Some(start) = self.start_date.as_deref() {
            job.start_date = parse_date(start);
        }
        if let Some(end) = self.end_date.as_deref() {
            job.end_date = parse_date(end);
        }
        if let Some(status) = self.status {
            job.status = status;
        }
        if let Some(cost) = &self.cost {
            job.cost = cost.to_amount();
        }
        if let Some(invoiced) = &self.invoiced_amount {
            job.invoiced_amount = invoiced.to_amount();
        }
        if let Some(client) = &self.client {
            job.client = client.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        JobDraft {
            id: Some("JOB-2024-001".to_string()),
            assignee: Assignee::employee("1"),
            description: "AC Maintenance".to_string(),
            start_date: Some("2024-07-25".to_string()),
            end_date: Some("2024-07-26".to_string()),
            status: JobStatus::Pending,
            cost: Some(RawAmount::from("R 1500.00")),
            invoiced_amount: Some(RawAmount::from("R 2200.00")),
            client: ClientDetails::default(),
        }
        .into_job("JOB-2024-001".to_string())
    }

    #[test]
    fn test_draft_normalizes_decorated_amounts() {
        let job = sample_job();
        assert_eq!(job.cost, 1500.0);
        assert_eq!(job.invoiced_amount, 2200.0);
        assert_eq!(job.start_date, NaiveDate::from_ymd_opt(2024, 7, 25));
    }

    #[test]
    fn test_derived_profit_and_margin() {
        let job = sample_job();
        assert!((job.profit() - 700.0).abs() < 1e-9);
        assert!((job.margin() - 31.818181818181817).abs() < 1e-9);
    }

    #[test]
    fn test_margin_zero_when_not_invoiced() {
        let mut job = sample_job();
        job.invoiced_amount = 0.0;
        assert_eq!(job.margin(), 0.0);
        assert!(job.margin().is_finite());
    }

    #[test]
    fn test_patch_is_shallow() {
        let mut job = sample_job();
        let patch = JobPatch {
            status: Some(JobStatus::Started),
            cost: Some(RawAmount::from(1800.0)),
            ..Default::default()
        };
        patch.apply(&mut job);

        assert_eq!(job.status, JobStatus::Started);
        assert_eq!(job.cost, 1800.0);
        // Unspecified fields untouched
        assert_eq!(job.description, "AC Maintenance");
        assert_eq!(job.invoiced_amount, 2200.0);
    }

    #[test]
    fn test_assignee_wire_shape() {
        let job = sample_job();
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["assignedTo"], "employee");
        assert_eq!(value["employeeId"], "1");
        assert_eq!(value["invoicedAmount"], 2200.0);
        assert!(value.get("teamId").is_none());
    }

    #[test]
    fn test_status_round_trip() {
        let status: JobStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, JobStatus::Completed);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"completed\"");
    }
}

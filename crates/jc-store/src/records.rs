//! The record store
//!
//! Owns the Job, Employee and Team collections for the lifetime of the
//! process. Mutations are synchronous on the in-memory state (single-writer
//! locks, so a read-modify-write on one record cannot lose updates) and
//! write the affected collection through to the durable store afterwards.
//!
//! Write-through failures are logged and reported, never rolled back: the
//! in-memory state stays authoritative. `flush` exists for callers that
//! need to observe durability explicitly.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use jc_core::traits::Entity;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use jc_models::{
    Employee, EmployeePatch, Job, JobDraft, JobPatch, JobStatus, Team, TeamPatch,
};

use crate::backend::{DurableStore, StoreError, StoreResult};
use crate::seed;

pub struct RecordStore {
    backend: Arc<dyn DurableStore>,
    jobs: RwLock<Vec<Job>>,
    employees: RwLock<Vec<Employee>>,
    teams: RwLock<Vec<Team>>,
}

impl RecordStore {
    /// Load all collections from the durable store.
    ///
    /// Collections the store has never seen are seeded with the
    /// demonstration dataset when `seed_demo_data` is set, and left empty
    /// otherwise. Load failures propagate; an unreadable store at startup
    /// is the one condition treated as fatal.
    pub async fn open(backend: Arc<dyn DurableStore>, seed_demo_data: bool) -> StoreResult<Self> {
        let jobs = Self::load_collection::<Job>(&*backend, Job::COLLECTION).await?;
        let employees = Self::load_collection::<Employee>(&*backend, Employee::COLLECTION).await?;
        let teams = Self::load_collection::<Team>(&*backend, Team::COLLECTION).await?;

        let store = Self {
            backend,
            jobs: RwLock::new(jobs.unwrap_or_else(|| {
                if seed_demo_data {
                    seed::demo_jobs()
                } else {
                    Vec::new()
                }
            })),
            employees: RwLock::new(employees.unwrap_or_else(|| {
                if seed_demo_data {
                    seed::demo_employees()
                } else {
                    Vec::new()
                }
            })),
            teams: RwLock::new(teams.unwrap_or_else(|| {
                if seed_demo_data {
                    seed::demo_teams()
                } else {
                    Vec::new()
                }
            })),
        };

        debug!(
            backend = store.backend.name(),
            jobs = store.jobs.read().len(),
            employees = store.employees.read().len(),
            teams = store.teams.read().len(),
            "record store opened"
        );
        Ok(store)
    }

    async fn load_collection<T: DeserializeOwned>(
        backend: &dyn DurableStore,
        collection: &str,
    ) -> StoreResult<Option<Vec<T>>> {
        match backend.load(collection).await? {
            Some(document) => {
                let records =
                    serde_json::from_str(&document).map_err(|source| StoreError::Corrupt {
                        collection: collection.to_string(),
                        source,
                    })?;
                Ok(Some(records))
            }
            None => Ok(None),
        }
    }

    /// Write one collection through to the durable store.
    ///
    /// Failures are logged and swallowed here; the mutation that triggered
    /// the write has already happened and stays in effect.
    async fn write_through<T: Serialize>(&self, collection: &str, snapshot: &[T]) {
        if let Err(e) = self.save_collection(collection, snapshot).await {
            warn!(collection, error = %e, "write-through to durable store failed; in-memory state retained");
        }
    }

    async fn save_collection<T: Serialize>(
        &self,
        collection: &str,
        snapshot: &[T],
    ) -> StoreResult<()> {
        let document = serde_json::to_string(snapshot).map_err(|source| StoreError::Corrupt {
            collection: collection.to_string(),
            source,
        })?;
        self.backend.save(collection, &document).await
    }

    /// Persist every collection, surfacing the first failure
    pub async fn flush(&self) -> StoreResult<()> {
        let jobs = self.jobs.read().clone();
        let employees = self.employees.read().clone();
        let teams = self.teams.read().clone();
        self.save_collection(Job::COLLECTION, &jobs).await?;
        self.save_collection(Employee::COLLECTION, &employees)
            .await?;
        self.save_collection(Team::COLLECTION, &teams).await?;
        Ok(())
    }

    // === Job operations ===

    /// Snapshot of the job collection, in insertion order
    pub fn jobs(&self) -> Vec<Job> {
        self.jobs.read().clone()
    }

    /// Find a job by id; `None` when absent, never an error
    pub fn get_job(&self, id: &str) -> Option<Job> {
        self.jobs.read().iter().find(|j| j.id == id).cloned()
    }

    /// Add a job from a normalized draft, assigning an id when absent
    pub async fn add_job(&self, draft: JobDraft) -> Job {
        let snapshot = {
            let mut jobs = self.jobs.write();
            let id = match draft.id.clone().filter(|id| !id.is_empty()) {
                Some(id) => id,
                None => next_job_id(&jobs),
            };
            let mut job = draft.into_job(id);
            let now = Utc::now();
            job.created_at = Some(now);
            job.updated_at = Some(now);
            jobs.push(job.clone());
            debug!(id = %job.id, "job added");
            (job, jobs.clone())
        };
        let (job, jobs) = snapshot;
        self.write_through(Job::COLLECTION, &jobs).await;
        job
    }

    /// Shallow-merge a patch into a job; no-op returning `None` when the id
    /// is unknown
    pub async fn update_job(&self, id: &str, patch: &JobPatch) -> Option<Job> {
        let result = {
            let mut jobs = self.jobs.write();
            match jobs.iter_mut().find(|j| j.id == id) {
                Some(job) => {
                    patch.apply(job);
                    job.updated_at = Some(Utc::now());
                    Some((job.clone(), jobs.clone()))
                }
                None => {
                    debug!(id, "update for unknown job ignored");
                    None
                }
            }
        };
        match result {
            Some((job, jobs)) => {
                self.write_through(Job::COLLECTION, &jobs).await;
                Some(job)
            }
            None => None,
        }
    }

    /// Set the status field only. Any status may follow any other; there is
    /// deliberately no transition table.
    pub async fn set_job_status(&self, id: &str, status: JobStatus) -> Option<Job> {
        let patch = JobPatch {
            status: Some(status),
            ..Default::default()
        };
        self.update_job(id, &patch).await
    }

    /// Remove a job; no-op returning `false` when the id is unknown
    pub async fn delete_job(&self, id: &str) -> bool {
        let snapshot = {
            let mut jobs = self.jobs.write();
            let before = jobs.len();
            jobs.retain(|j| j.id != id);
            if jobs.len() == before {
                None
            } else {
                debug!(id, "job deleted");
                Some(jobs.clone())
            }
        };
        match snapshot {
            Some(jobs) => {
                self.write_through(Job::COLLECTION, &jobs).await;
                true
            }
            None => false,
        }
    }

    // === Employee operations ===

    pub fn employees(&self) -> Vec<Employee> {
        self.employees.read().clone()
    }

    pub fn get_employee(&self, id: &str) -> Option<Employee> {
        self.employees.read().iter().find(|e| e.id == id).cloned()
    }

    /// Add an employee, assigning an `emp-…` id when absent
    pub async fn add_employee(&self, mut employee: Employee) -> Employee {
        let snapshot = {
            let mut employees = self.employees.write();
            if employee.id.is_empty() {
                employee.id = format!("emp-{}", Uuid::new_v4());
            }
            let now = Utc::now();
            employee.created_at = Some(now);
            employee.updated_at = Some(now);
            employees.push(employee.clone());
            employees.clone()
        };
        self.write_through(Employee::COLLECTION, &snapshot).await;
        employee
    }

    pub async fn update_employee(&self, id: &str, patch: &EmployeePatch) -> Option<Employee> {
        let result = {
            let mut employees = self.employees.write();
            match employees.iter_mut().find(|e| e.id == id) {
                Some(employee) => {
                    patch.apply(employee);
                    employee.updated_at = Some(Utc::now());
                    Some((employee.clone(), employees.clone()))
                }
                None => None,
            }
        };
        match result {
            Some((employee, employees)) => {
                self.write_through(Employee::COLLECTION, &employees).await;
                Some(employee)
            }
            None => None,
        }
    }

    pub async fn delete_employee(&self, id: &str) -> bool {
        let snapshot = {
            let mut employees = self.employees.write();
            let before = employees.len();
            employees.retain(|e| e.id != id);
            (employees.len() != before).then(|| employees.clone())
        };
        match snapshot {
            Some(employees) => {
                self.write_through(Employee::COLLECTION, &employees).await;
                true
            }
            None => false,
        }
    }

    // === Team operations ===

    pub fn teams(&self) -> Vec<Team> {
        self.teams.read().clone()
    }

    pub fn get_team(&self, id: &str) -> Option<Team> {
        self.teams.read().iter().find(|t| t.id == id).cloned()
    }

    /// Add a team, assigning a `team-…` id when absent
    pub async fn add_team(&self, mut team: Team) -> Team {
        let snapshot = {
            let mut teams = self.teams.write();
            if team.id.is_empty() {
                team.id = format!("team-{}", Uuid::new_v4());
            }
            let now = Utc::now();
            team.created_at = Some(now);
            team.updated_at = Some(now);
            teams.push(team.clone());
            teams.clone()
        };
        self.write_through(Team::COLLECTION, &snapshot).await;
        team
    }

    pub async fn update_team(&self, id: &str, patch: &TeamPatch) -> Option<Team> {
        let result = {
            let mut teams = self.teams.write();
            match teams.iter_mut().find(|t| t.id == id) {
                Some(team) => {
                    patch.apply(team);
                    team.updated_at = Some(Utc::now());
                    Some((team.clone(), teams.clone()))
                }
                None => None,
            }
        };
        match result {
            Some((team, teams)) => {
                self.write_through(Team::COLLECTION, &teams).await;
                Some(team)
            }
            None => None,
        }
    }

    pub async fn delete_team(&self, id: &str) -> bool {
        let snapshot = {
            let mut teams = self.teams.write();
            let before = teams.len();
            teams.retain(|t| t.id != id);
            (teams.len() != before).then(|| teams.clone())
        };
        match snapshot {
            Some(teams) => {
                self.write_through(Team::COLLECTION, &teams).await;
                true
            }
            None => false,
        }
    }
}

/// Next job id in `JOB-<year>-<seq>` form.
///
/// The sequence continues from the highest suffix already present for the
/// current year, so generated ids stay unique within one store.
fn next_job_id(jobs: &[Job]) -> String {
    let year = Utc::now().year();
    let prefix = format!("JOB-{year}-");
    let max_seq = jobs
        .iter()
        .filter_map(|j| j.id.strip_prefix(&prefix))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:03}", max_seq + 1)
}

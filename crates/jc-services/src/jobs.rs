//! Job services
//!
//! Create/update/delete/status flows: run the contract, then hit the store.
//! The store never re-validates.

use std::sync::Arc;

use jc_contracts::{Contract, CreateJobContract, UpdateJobContract};
use jc_models::{Job, JobDraft, JobPatch, JobStatus};
use jc_store::RecordStore;
use tracing::debug;

use crate::result::ServiceResult;

pub struct JobsService {
    store: Arc<RecordStore>,
}

impl JobsService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Validate a draft and add it to the store
    pub async fn create(&self, draft: JobDraft) -> ServiceResult<Job> {
        if let Err(errors) = CreateJobContract::new().validate(&draft) {
            return ServiceResult::failure(errors);
        }
        let job = self.store.add_job(draft).await;
        debug!(id = %job.id, "job created");
        ServiceResult::success(job)
    }

    /// Validate a patch and merge it into an existing job
    pub async fn update(&self, id: &str, patch: JobPatch) -> ServiceResult<Job> {
        if let Err(errors) = UpdateJobContract::new().validate(&patch) {
            return ServiceResult::failure(errors);
        }
        match self.store.update_job(id, &patch).await {
            Some(job) => ServiceResult::success(job),
            None => ServiceResult::failure_with_message(format!("Job {id} not found")),
        }
    }

    /// Unguarded status assignment
    pub async fn set_status(&self, id: &str, status: JobStatus) -> ServiceResult<Job> {
        match self.store.set_job_status(id, status).await {
            Some(job) => ServiceResult::success(job),
            None => ServiceResult::failure_with_message(format!("Job {id} not found")),
        }
    }

    /// Delete a job. Deleting an unknown id succeeds with `false`, matching
    /// the store's no-op semantics.
    pub async fn delete(&self, id: &str) -> ServiceResult<bool> {
        ServiceResult::success(self.store.delete_job(id).await)
    }
}

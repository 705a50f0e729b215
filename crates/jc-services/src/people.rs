//! Employee and team services

use std::sync::Arc;

use jc_contracts::{Contract, EmployeeContract, TeamContract};
use jc_models::{Employee, EmployeePatch, Team, TeamPatch};
use jc_store::RecordStore;

use crate::result::ServiceResult;

pub struct EmployeesService {
    store: Arc<RecordStore>,
}

impl EmployeesService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, employee: Employee) -> ServiceResult<Employee> {
        if let Err(errors) = EmployeeContract::new().validate(&employee) {
            return ServiceResult::failure(errors);
        }
        ServiceResult::success(self.store.add_employee(employee).await)
    }

    pub async fn update(&self, id: &str, patch: EmployeePatch) -> ServiceResult<Employee> {
        match self.store.update_employee(id, &patch).await {
            Some(employee) => ServiceResult::success(employee),
            None => ServiceResult::failure_with_message(format!("Employee {id} not found")),
        }
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<bool> {
        ServiceResult::success(self.store.delete_employee(id).await)
    }
}

pub struct TeamsService {
    store: Arc<RecordStore>,
}

impl TeamsService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, team: Team) -> ServiceResult<Team> {
        if let Err(errors) = TeamContract::new().validate(&team) {
            return ServiceResult::failure(errors);
        }
        ServiceResult::success(self.store.add_team(team).await)
    }

    pub async fn update(&self, id: &str, patch: TeamPatch) -> ServiceResult<Team> {
        match self.store.update_team(id, &patch).await {
            Some(team) => ServiceResult::success(team),
            None => ServiceResult::failure_with_message(format!("Team {id} not found")),
        }
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<bool> {
        ServiceResult::success(self.store.delete_team(id).await)
    }
}

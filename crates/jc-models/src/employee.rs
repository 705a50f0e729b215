//! Employee model

use chrono::{DateTime, Utc};
use jc_core::traits::{Entity, Id, Identifiable, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee entity
///
/// `team_id` is a weak reference into the Team collection; membership is a
/// single optional link, not a join table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Id,

    #[validate(length(min = 1, message = "can't be blank"))]
    pub name: String,

    #[validate(email(message = "is not a valid email address"))]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub team_id: Option<Id>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Employee {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            team_id: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Identifiable for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Timestamped for Employee {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Entity for Employee {
    const COLLECTION: &'static str = "employees";
    const TYPE_NAME: &'static str = "Employee";
}

/// Partial update for an employee
///
/// `team_id` uses a double option: outer `None` leaves the link alone,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub team_id: Option<Option<Id>>,
}

impl EmployeePatch {
    /// Shallow-merge into an existing employee
    pub fn apply(&self, employee: &mut Employee) {
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(email) = &self.email {
            employee.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            employee.phone = phone.clone();
        }
        if let Some(team_id) = &self.team_id {
            employee.team_id = team_id.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_shallow_merge() {
        let mut employee = Employee::new("1", "John Smith", "john@example.com");
        employee.team_id = Some("1".to_string());

        let patch = EmployeePatch {
            phone: Some("555-123-4567".to_string()),
            ..Default::default()
        };
        patch.apply(&mut employee);

        assert_eq!(employee.phone, "555-123-4567");
        assert_eq!(employee.name, "John Smith");
        assert_eq!(employee.team_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_patch_can_clear_team() {
        let mut employee = Employee::new("1", "John Smith", "john@example.com");
        employee.team_id = Some("1".to_string());

        let patch = EmployeePatch {
            team_id: Some(None),
            ..Default::default()
        };
        patch.apply(&mut employee);

        assert_eq!(employee.team_id, None);
    }

    #[test]
    fn test_validate_email() {
        let employee = Employee::new("1", "John Smith", "not-an-email");
        assert!(employee.validate().is_err());
    }
}

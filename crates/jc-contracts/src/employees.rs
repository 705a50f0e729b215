//! Contract for employee records

use jc_core::error::ValidationErrors;
use jc_models::Employee;
use validator::Validate;

use crate::base::{Contract, ValidationResult};

/// Presence and shape checks for employees (name, email)
#[derive(Debug, Default)]
pub struct EmployeeContract;

impl EmployeeContract {
    pub fn new() -> Self {
        Self
    }
}

impl Contract<Employee> for EmployeeContract {
    fn validate(&self, employee: &Employee) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        if let Err(field_errors) = Validate::validate(employee) {
            errors.merge(field_errors.into());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_employee() {
        let employee = Employee::new("1", "John Smith", "john@example.com");
        assert!(EmployeeContract::new().validate(&employee).is_ok());
    }

    #[test]
    fn test_bad_email_rejected() {
        let employee = Employee::new("1", "John Smith", "john@");
        let errors = EmployeeContract::new().validate(&employee).unwrap_err();
        assert!(errors.has_error("email"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let employee = Employee::new("1", "", "john@example.com");
        let errors = EmployeeContract::new().validate(&employee).unwrap_err();
        assert!(errors.has_error("name"));
    }
}

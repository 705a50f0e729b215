//! Contract for team records

use jc_core::error::ValidationErrors;
use jc_models::Team;
use validator::Validate;

use crate::base::{Contract, ValidationResult};

/// Presence checks for teams
#[derive(Debug, Default)]
pub struct TeamContract;

impl TeamContract {
    pub fn new() -> Self {
        Self
    }
}

impl Contract<Team> for TeamContract {
    fn validate(&self, team: &Team) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        if let Err(field_errors) = Validate::validate(team) {
            errors.merge(field_errors.into());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

//! Contracts for job drafts and patches

use jc_core::error::ValidationErrors;
use jc_core::types::parse_date;
use jc_models::{JobDraft, JobPatch};
use validator::Validate;

use crate::base::{Contract, ValidationResult};

/// Contract for creating a job from a submitted draft
///
/// Dates are required on create and must form a valid interval; amounts, if
/// given, must be non-negative once stripped of decoration.
#[derive(Debug, Default)]
pub struct CreateJobContract;

impl CreateJobContract {
    pub fn new() -> Self {
        Self
    }

    fn validate_assignee(&self, draft: &JobDraft, errors: &mut ValidationErrors) {
        if draft.assignee.ref_id().trim().is_empty() {
            errors.add("assignee", "must reference an employee or team");
        }
    }

    fn validate_dates(&self, draft: &JobDraft, errors: &mut ValidationErrors) {
        let start = match draft.start_date.as_deref() {
            None | Some("") => {
                errors.add("startDate", "can't be blank");
                None
            }
            Some(raw) => {
                let parsed = parse_date(raw);
                if parsed.is_none() {
                    errors.add("startDate", "is not a valid date");
                }
                parsed
            }
        };
        let end = match draft.end_date.as_deref() {
            None | Some("") => {
                errors.add("endDate", "can't be blank");
                None
            }
            Some(raw) => {
                let parsed = parse_date(raw);
                if parsed.is_none() {
                    errors.add("endDate", "is not a valid date");
                }
                parsed
            }
        };

        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                errors.add("endDate", "must be on or after the start date");
            }
        }
    }

    fn validate_amounts(&self, draft: &JobDraft, errors: &mut ValidationErrors) {
        if let Some(cost) = &draft.cost {
            if cost.to_amount() < 0.0 {
                errors.add("cost", "must be non-negative");
            }
        }
        if let Some(invoiced) = &draft.invoiced_amount {
            if invoiced.to_amount() < 0.0 {
                errors.add("invoicedAmount", "must be non-negative");
            }
        }
    }
}

impl Contract<JobDraft> for CreateJobContract {
    fn validate(&self, draft: &JobDraft) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if let Err(field_errors) = Validate::validate(draft) {
            errors.merge(field_errors.into());
        }

        self.validate_assignee(draft, &mut errors);
        self.validate_dates(draft, &mut errors);
        self.validate_amounts(draft, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Contract for partial job updates
///
/// Only supplied fields are checked; an empty patch is valid.
#[derive(Debug, Default)]
pub struct UpdateJobContract;

impl UpdateJobContract {
    pub fn new() -> Self {
        Self
    }
}

impl Contract<JobPatch> for UpdateJobContract {
    fn validate(&self, patch: &JobPatch) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if let Some(description) = &patch.description {
            if description.trim().is_empty() {
                errors.add("description", "can't be blank");
            }
        }
        if let Some(assignee) = &patch.assignee {
            if assignee.ref_id().trim().is_empty() {
                errors.add("assignee", "must reference an employee or team");
            }
        }
        if let Some(raw) = patch.start_date.as_deref() {
            if parse_date(raw).is_none() {
                errors.add("startDate", "is not a valid date");
            }
        }
        if let Some(raw) = patch.end_date.as_deref() {
            if parse_date(raw).is_none() {
                errors.add("endDate", "is not a valid date");
            }
        }
        if let (Some(start), Some(end)) = (
            patch.start_date.as_deref().and_then(parse_date),
            patch.end_date.as_deref().and_then(parse_date),
        ) {
            if start > end {
                errors.add("endDate", "must be on or after the start date");
            }
        }
        if let Some(cost) = &patch.cost {
            if cost.to_amount() < 0.0 {
                errors.add("cost", "must be non-negative");
            }
        }
        if let Some(invoiced) = &patch.invoiced_amount {
            if invoiced.to_amount() < 0.0 {
                errors.add("invoicedAmount", "must be non-negative");
            }
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
    use jc_core::types::RawAmount;
    use jc_models::Assignee;

    fn valid_draft() -> JobDraft {
        let mut draft = JobDraft::new(Assignee::employee("1"), "AC Maintenance");
        draft.start_date = Some("2024-07-25".to_string());
        draft.end_date = Some("2024-07-26".to_string());
        draft.cost = Some(RawAmount::from("R 1500.00"));
        draft.invoiced_amount = Some(RawAmount::from("R 2200.00"));
        draft
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(CreateJobContract::new().validate(&valid_draft()).is_ok());
    }

    #[test]
    fn test_blank_description_rejected() {
        let mut draft = valid_draft();
        draft.description = String::new();
        let errors = CreateJobContract::new().validate(&draft).unwrap_err();
        assert!(errors.has_error("description"));
    }

    #[test]
    fn test_inverted_dates_rejected() {
        let mut draft = valid_draft();
        draft.start_date = Some("2024-07-26".to_string());
        draft.end_date = Some("2024-07-25".to_string());
        let errors = CreateJobContract::new().validate(&draft).unwrap_err();
        assert!(errors.has_error("endDate"));
    }

    #[test]
    fn test_missing_dates_rejected() {
        let mut draft = valid_draft();
        draft.start_date = None;
        let errors = CreateJobContract::new().validate(&draft).unwrap_err();
        assert!(errors.has_error("startDate"));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut draft = valid_draft();
        draft.cost = Some(RawAmount::from(-10.0));
        let errors = CreateJobContract::new().validate(&draft).unwrap_err();
        assert!(errors.has_error("cost"));
    }

    #[test]
    fn test_empty_patch_is_valid() {
        assert!(UpdateJobContract::new()
            .validate(&JobPatch::default())
            .is_ok());
    }

    #[test]
    fn test_patch_with_bad_date_rejected() {
        let patch = JobPatch {
            end_date: Some("soon".to_string()),
            ..Default::default()
        };
        let errors = UpdateJobContract::new().validate(&patch).unwrap_err();
        assert!(errors.has_error("endDate"));
    }
}

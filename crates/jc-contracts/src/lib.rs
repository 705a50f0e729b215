//! # jc-contracts
//!
//! Validation contracts for the form-submission boundary.
//!
//! Required-field and range checks run here, before the record store is
//! touched; the store itself does not re-validate.

pub mod base;
pub mod employees;
pub mod jobs;
pub mod teams;

pub use base::{Contract, ValidationResult};
pub use employees::EmployeeContract;
pub use jobs::{CreateJobContract, UpdateJobContract};
pub use teams::TeamContract;

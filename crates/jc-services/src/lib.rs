//! # jc-services
//!
//! Services compose the form-boundary contracts with the record store:
//! validate, then mutate. They return `ServiceResult`, which carries either
//! the affected record or the validation errors for the form to display.

pub mod jobs;
pub mod people;
pub mod result;

pub use jobs::JobsService;
pub use people::{EmployeesService, TeamsService};
pub use result::ServiceResult;

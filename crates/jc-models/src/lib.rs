//! # jc-models
//!
//! Domain models for Jobcard RS: jobs, employees, teams, and the permission
//! flags consulted by the surrounding authorization layer.

pub mod employee;
pub mod job;
pub mod permissions;
pub mod team;

pub use employee::*;
pub use job::*;
pub use permissions::*;
pub use team::*;

//! Result type alias

use crate::error::JcError;

/// Standard Result type for Jobcard operations
pub type JcResult<T> = Result<T, JcError>;

//! Service result type

use jc_core::error::{JcError, ValidationErrors};
use jc_core::result::JcResult;

/// Represents the outcome of a service call: the value on success, the
/// validation errors for the form boundary on failure.
#[derive(Debug)]
pub struct ServiceResult<T> {
    success: bool,
    result: Option<T>,
    errors: ValidationErrors,
}

impl<T> ServiceResult<T> {
    /// Create a successful service result
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: ValidationErrors::new(),
        }
    }

    /// Create a failed service result
    pub fn failure(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            result: None,
            errors,
        }
    }

    /// Create a failed service result with a single base error
    pub fn failure_with_message(message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add_base(message);
        Self::failure(errors)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Get the result (if successful)
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Take the result (consuming it)
    pub fn take_result(&mut self) -> Option<T> {
        self.result.take()
    }

    /// Unwrap the result, panicking if it was a failure
    pub fn unwrap(self) -> T {
        self.result.expect("called unwrap on a failed ServiceResult")
    }

    /// Get the errors
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Full error messages for display
    pub fn full_messages(&self) -> Vec<String> {
        self.errors.full_messages()
    }

    /// Map the result if successful
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ServiceResult<U> {
        ServiceResult {
            success: self.success,
            result: self.result.map(f),
            errors: self.errors,
        }
    }

    /// Chain another service call if successful
    pub fn and_then<U, F: FnOnce(T) -> ServiceResult<U>>(self, f: F) -> ServiceResult<U> {
        if self.success {
            if let Some(result) = self.result {
                return f(result);
            }
        }
        ServiceResult {
            success: false,
            result: None,
            errors: self.errors,
        }
    }

    /// Convert to a standard Result
    pub fn into_result(self) -> JcResult<T> {
        if self.success {
            self.result
                .ok_or_else(|| JcError::Internal("service succeeded without a result".into()))
        } else {
            Err(JcError::Validation(self.errors))
        }
    }
}

impl<T> From<Result<T, ValidationErrors>> for ServiceResult<T> {
    fn from(result: Result<T, ValidationErrors>) -> Self {
        match result {
            Ok(value) => ServiceResult::success(value),
            Err(errors) => ServiceResult::failure(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_result() {
        let result = ServiceResult::success(42);
        assert!(result.is_success());
        assert_eq!(result.result(), Some(&42));
    }

    #[test]
    fn test_failure_result() {
        let result: ServiceResult<i32> = ServiceResult::failure_with_message("nope");
        assert!(result.is_failure());
        assert!(result.result().is_none());
        assert_eq!(result.full_messages(), vec!["nope"]);
    }

    #[test]
    fn test_map_and_chain() {
        let doubled = ServiceResult::success(21).map(|n| n * 2);
        assert_eq!(doubled.result(), Some(&42));

        let chained = doubled.and_then(|n| ServiceResult::success(n.to_string()));
        assert_eq!(chained.result(), Some(&"42".to_string()));

        let failed: ServiceResult<i32> = ServiceResult::failure_with_message("boom");
        let still_failed = failed.and_then(ServiceResult::success);
        assert!(still_failed.is_failure());
    }

    #[test]
    fn test_into_result() {
        assert!(ServiceResult::success(1).into_result().is_ok());
        let err: ServiceResult<i32> = ServiceResult::failure_with_message("bad");
        assert!(matches!(err.into_result(), Err(JcError::Validation(_))));
    }
}

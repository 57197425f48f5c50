/// Service-level error taxonomy
///
/// Every expected outcome other than success is a variant here, so callers
/// branch on the kind instead of inspecting message text. Only
/// [`ServiceError::Internal`] represents an unexpected failure.

use crate::auth::password::PasswordError;
use crate::store::StoreError;

/// Service result type alias
pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Client-correctable input (message length, password length, ...)
    #[error("{0}")]
    Validation(String),

    /// Identifier is not a well-formed UUID
    #[error("Invalid ID format")]
    InvalidId,

    /// Well-formed identifier with no matching entity
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation
    #[error("{0}")]
    Conflict(String),

    /// Missing or invalid credentials
    #[error("{0}")]
    Unauthorized(String),

    /// Store or unexpected failure; the message is for logs only
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn thought_not_found() -> Self {
        ServiceError::NotFound("Thought not found".to_string())
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(constraint) => {
                ServiceError::Conflict(format!("Constraint violation: {}", constraint))
            }
            StoreError::Backend(msg) => ServiceError::Internal(msg),
        }
    }
}

impl From<PasswordError> for ServiceError {
    fn from(err: PasswordError) -> Self {
        ServiceError::Internal(format!("Password operation failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ServiceError::InvalidId.to_string(), "Invalid ID format");
        assert_eq!(ServiceError::thought_not_found().to_string(), "Thought not found");
        assert_eq!(
            ServiceError::Validation("too short".to_string()).to_string(),
            "too short"
        );
    }

    #[test]
    fn test_store_backend_error_is_internal() {
        let err = ServiceError::from(StoreError::Backend("connection reset".to_string()));
        assert!(matches!(err, ServiceError::Internal(_)));
    }
}

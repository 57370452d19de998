//! Client error types

use shared::error::{AppError, ErrorKind};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Timesheet item that cannot be converted into a shift
    #[error("Invalid timesheet entry: {0}")]
    InvalidTimesheet(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let kind = match &err {
            ClientError::Http(e) if e.is_timeout() => ErrorKind::TimeoutError,
            ClientError::Http(e) if e.is_decode() => ErrorKind::DecodeError,
            ClientError::Http(_) | ClientError::Internal(_) => ErrorKind::NetworkError,
            ClientError::Unauthorized => ErrorKind::NotAuthenticated,
            ClientError::Forbidden(_) => ErrorKind::InvalidCredentials,
            ClientError::NotFound(_) => ErrorKind::NotFound,
            ClientError::Validation(_) => ErrorKind::ValidationFailed,
            ClientError::InvalidTimesheet(_) => ErrorKind::InvalidTimesheetEntry,
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                ErrorKind::DecodeError
            }
        };
        AppError::with_message(kind, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_into_app_error() {
        let err: AppError = ClientError::Unauthorized.into();
        assert_eq!(err.kind, ErrorKind::NotAuthenticated);

        let err: AppError = ClientError::InvalidTimesheet("2 projections".into()).into();
        assert_eq!(err.kind, ErrorKind::InvalidTimesheetEntry);
        assert_eq!(err.message, "Invalid timesheet entry: 2 projections");

        let err: AppError = ClientError::InvalidResponse("no header".into()).into();
        assert_eq!(err.kind, ErrorKind::DecodeError);
    }

    #[test]
    fn test_serialization_error_into_app_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: AppError = ClientError::from(json_err).into();
        assert_eq!(err.kind, ErrorKind::DecodeError);
    }
}

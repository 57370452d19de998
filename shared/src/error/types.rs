//! Error types

use super::codes::ErrorKind;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Application error with structured kind and details
///
/// Every failure in a payroll run ends up as an `AppError`:
/// - a stable [`ErrorKind`]
/// - a human-readable message shown to the operator
/// - optional structured details (employee, date, file) for the log
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The kind identifying the type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<BTreeMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the kind
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            message: kind.message().to_string(),
            kind,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::ValidationFailed, msg)
    }

    /// Create an invalid format error (numbers, dates, durations)
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::InvalidFormat, msg)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::ConfigError, msg)
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::NetworkError, msg)
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::DecodeError, msg)
    }

    /// Create a file system error
    pub fn io(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::IoError, msg)
    }

    /// Create an employee not found error
    pub fn employee_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorKind::EmployeeNotFound,
            format!("failed to find user with id={}", id),
        )
        .with_detail("employee_id", id)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

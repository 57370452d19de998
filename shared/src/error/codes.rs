//! Error kinds for the payroll workspace
//!
//! Kinds are organized by category:
//! - 0xxx: General / parse errors
//! - 1xxx: Authentication errors
//! - 4xxx: Order export errors
//! - 8xxx: Payroll and employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error kind enum
///
/// Represented as u16 values so a failed run can be reported with a stable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorKind {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid format (number, date, duration)
    InvalidFormat = 6,
    /// Unknown column header in an import file
    UnknownHeader = 10,

    // ==================== 1xxx: Auth ====================
    /// Not authenticated against an external service
    NotAuthenticated = 1001,
    /// Invalid credentials
    InvalidCredentials = 1002,

    // ==================== 4xxx: Order export ====================
    /// Order export file missing for a date
    OrderExportNotFound = 4001,
    /// Order export row could not be parsed
    OrderParseFailed = 4002,

    // ==================== 8xxx: Payroll ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee has no payroll number
    EmployeeNumberMissing = 8002,
    /// Hourly employee has no pay rate
    EmployeeRateMissing = 8003,
    /// Unapproved shift on an hourly employee
    UnapprovedShift = 8201,
    /// Tips to distribute but no tip shares on that day
    EmptyTipPool = 8202,
    /// Timesheet item without exactly one projection
    InvalidTimesheetEntry = 8203,
    /// Sales matched no commission tier
    NoCommissionTierMatched = 8301,

    // ==================== 9xxx: System ====================
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Response could not be decoded
    DecodeError = 9006,
    /// File system error
    IoError = 9007,
    /// Operator input stream closed
    InputClosed = 9101,
}

impl ErrorKind {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default English message for this kind
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorKind::ValidationFailed => "Validation failed",
            ErrorKind::NotFound => "Resource not found",
            ErrorKind::InvalidFormat => "Invalid format",
            ErrorKind::UnknownHeader => "Unknown column header",

            // Auth
            ErrorKind::NotAuthenticated => "Not authenticated",
            ErrorKind::InvalidCredentials => "Invalid email or password",

            // Order export
            ErrorKind::OrderExportNotFound => "Order export not found",
            ErrorKind::OrderParseFailed => "Order export could not be parsed",

            // Payroll
            ErrorKind::EmployeeNotFound => "Employee not found",
            ErrorKind::EmployeeNumberMissing => "Employee has no payroll number",
            ErrorKind::EmployeeRateMissing => "Hourly employee has no pay rate",
            ErrorKind::UnapprovedShift => "Unapproved shift found",
            ErrorKind::EmptyTipPool => "Tips collected but no tip shares were worked",
            ErrorKind::InvalidTimesheetEntry => "Invalid timesheet entry",
            ErrorKind::NoCommissionTierMatched => "Sales did not satisfy any commission tier",

            // System
            ErrorKind::NetworkError => "Network error",
            ErrorKind::TimeoutError => "Operation timed out",
            ErrorKind::ConfigError => "Configuration error",
            ErrorKind::DecodeError => "Response could not be decoded",
            ErrorKind::IoError => "File system error",
            ErrorKind::InputClosed => "Operator input closed",
        }
    }
}

impl From<ErrorKind> for u16 {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        kind.code()
    }
}

/// Error when converting from an invalid u16 to ErrorKind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorKind(pub u16);

impl fmt::Display for InvalidErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorKind {}

impl TryFrom<u16> for ErrorKind {
    type Error = InvalidErrorKind;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorKind::ValidationFailed),
            3 => Ok(ErrorKind::NotFound),
            6 => Ok(ErrorKind::InvalidFormat),
            10 => Ok(ErrorKind::UnknownHeader),

            // Auth
            1001 => Ok(ErrorKind::NotAuthenticated),
            1002 => Ok(ErrorKind::InvalidCredentials),

            // Order export
            4001 => Ok(ErrorKind::OrderExportNotFound),
            4002 => Ok(ErrorKind::OrderParseFailed),

            // Payroll
            8001 => Ok(ErrorKind::EmployeeNotFound),
            8002 => Ok(ErrorKind::EmployeeNumberMissing),
            8003 => Ok(ErrorKind::EmployeeRateMissing),
            8201 => Ok(ErrorKind::UnapprovedShift),
            8202 => Ok(ErrorKind::EmptyTipPool),
            8203 => Ok(ErrorKind::InvalidTimesheetEntry),
            8301 => Ok(ErrorKind::NoCommissionTierMatched),

            // System
            9003 => Ok(ErrorKind::NetworkError),
            9004 => Ok(ErrorKind::TimeoutError),
            9005 => Ok(ErrorKind::ConfigError),
            9006 => Ok(ErrorKind::DecodeError),
            9007 => Ok(ErrorKind::IoError),
            9101 => Ok(ErrorKind::InputClosed),

            _ => Err(InvalidErrorKind(value)),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

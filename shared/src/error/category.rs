//! Error category classification

use super::codes::ErrorKind;
use serde::{Deserialize, Serialize};

/// Error category classification based on code ranges
///
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 4xxx: Order export errors
/// - 8xxx: Payroll errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Order export errors (4xxx)
    Order,
    /// Payroll errors (8xxx)
    Payroll,
    /// System errors (9xxx and anything unassigned)
    System,
}

impl ErrorCategory {
    /// Determine category from code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            4000..5000 => Self::Order,
            8000..9000 => Self::Payroll,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Order => "order",
            Self::Payroll => "payroll",
            Self::System => "system",
        }
    }

    /// Business-rule violations are surfaced to the operator as such,
    /// not as crashes
    pub fn is_business_rule(&self) -> bool {
        matches!(self, Self::Payroll)
    }
}

impl ErrorKind {
    /// Get the category for this kind
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

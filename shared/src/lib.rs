//! Shared types for the weekly payroll report
//!
//! Domain model (orders, employees, shifts, commission tiers, summaries) and the
//! unified error system used by `timesheet-client` and `payroll-report`.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorKind};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

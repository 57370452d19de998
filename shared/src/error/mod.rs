//! Unified error system
//!
//! - [`ErrorKind`]: numeric error kinds shared by every crate in the workspace
//! - [`ErrorCategory`]: classification of kinds by code range
//! - [`AppError`]: error with kind, message and optional details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General / parse errors
//! - 1xxx: Authentication errors
//! - 4xxx: Order export errors
//! - 8xxx: Payroll and employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorKind};
//!
//! let err = AppError::new(ErrorKind::EmptyTipPool)
//!     .with_detail("date", "2024-06-12");
//! assert_eq!(err.kind.code(), 8202);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorKind, InvalidErrorKind};
pub use types::{AppError, AppResult};

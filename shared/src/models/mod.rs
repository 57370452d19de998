//! Data models
//!
//! Value types shared by the timesheet client and the report pipeline.
//! Money is always `Decimal`; employee identity is always [`EmployeeId`].

pub mod cash;
pub mod commission;
pub mod daily_summary;
pub mod employee;
pub mod merchant;
pub mod order;
pub mod payroll;
pub mod shift;
pub mod weekly_summary;

// Re-exports
pub use cash::*;
pub use commission::*;
pub use daily_summary::*;
pub use employee::*;
pub use merchant::*;
pub use order::*;
pub use payroll::*;
pub use shift::*;
pub use weekly_summary::*;

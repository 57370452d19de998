//! Payroll module - from timesheets and daily sales to pay
//!
//! - [`timesheet`] - scheduling records into a [`Timesheet`](shared::models::Timesheet) and hours
//! - [`tips`] - tip shares and the daily tip pool
//! - [`weekly`] - weekly summary and labor costs
//! - [`cash`] - cash withdrawals from the sheet or the prompt
//! - [`commission`] - commission pay statements
//! - [`export`] - payroll CSV rows

pub mod cash;
pub mod commission;
pub mod export;
pub mod timesheet;
pub mod tips;
pub mod weekly;

pub use commission::{CommissionStatement, commission_statements};
pub use export::{payroll_entries, read_payroll_csv, write_payroll_csv};
pub use timesheet::{TimesheetData, build_directory, build_timesheet};
pub use tips::{distribute_tips, tip_share};
pub use weekly::{LaborCosts, WageLine, calculate_weekly_summary, labor_costs};

//! Core module - configuration and payroll policy
//!
//! - [`Config`] - settings read from the environment
//! - [`Policy`] - commission employees and tip exclusions from a JSON file

pub mod config;
pub mod policy;

pub use config::{CashSheetConfig, Config};
pub use policy::{CommissionEmployeePolicy, Policy};

//! Timesheet Client - HTTP client for the scheduling service
//!
//! Logs in, lists users and pulls timesheet reports for a date range.
//! Responses are converted into plain records; the report pipeline turns
//! them into domain types.

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod http;

pub use api::{TimesheetClient, ShiftRecord, UserRecord};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

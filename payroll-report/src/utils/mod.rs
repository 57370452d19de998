//! Utility module - logging setup and reporting dates

pub mod dates;
pub mod logger;

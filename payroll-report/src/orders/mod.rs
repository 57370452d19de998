//! Orders module - order export parsing and aggregation
//!
//! - [`parse`] - `OrderDetails.csv` rows into [`OrderDetail`](shared::models::OrderDetail)
//! - [`summary`] - per-group [`OrderSummary`](shared::models::OrderSummary)
//! - [`daily`] - one date's [`DailySummary`](shared::models::DailySummary)

pub mod daily;
pub mod parse;
pub mod summary;

pub use daily::build_daily_summary;
pub use parse::parse_order_details;
pub use summary::summarize;

//! Report module - text report assembly
//!
//! - [`builder`] - fixed-width text builder
//! - [`render`] - section-by-section weekly report

pub mod builder;
pub mod render;

pub use builder::ReportBuilder;
pub use render::{ReportData, ReportRenderer, order_summary_line};

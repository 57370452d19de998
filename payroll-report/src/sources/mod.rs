//! External data sources
//!
//! Each source sits behind an async trait so the pipeline can run against
//! in-memory data in tests.

pub mod order_export;
pub mod sheets;
pub mod timesheet;

pub use order_export::{LocalExportDir, OrderExportSource, export_path};
pub use sheets::{GoogleSheetsClient, SheetRowsSource};
pub use timesheet::TimesheetService;

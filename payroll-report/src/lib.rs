//! Payroll Report - weekly restaurant payroll and sales report
//!
//! # Overview
//!
//! One sequential batch run per week:
//!
//! 1. pull users and timesheets from the scheduling service
//! 2. pull one order export per reporting date and aggregate it
//! 3. reconcile delivery-platform orders with the operator
//! 4. pool tips by shift length, compute commission pay
//! 5. render the text report and the payroll CSV, then write both
//!
//! # Module structure
//!
//! ```text
//! payroll-report/src/
//! ├── core/          # configuration and policy file
//! ├── orders/        # export parsing, order summaries, daily summaries
//! ├── delivery/      # third-party delivery reconciliation
//! ├── payroll/       # timesheet, tips, cash, commission, weekly, export
//! ├── report/        # text report assembly
//! ├── sources/       # scheduling service, order export, spreadsheet adapters
//! ├── utils/         # logging, reporting dates
//! ├── operator.rs    # operator prompts
//! └── pipeline.rs    # end-to-end run
//! ```

pub mod core;
pub mod delivery;
pub mod operator;
pub mod orders;
pub mod payroll;
pub mod pipeline;
pub mod report;
pub mod sources;
pub mod utils;

// Re-export public types
pub use core::{Config, Policy};
pub use operator::{Answer, OperatorInput, ScriptedOperator, TerminalOperator};
pub use pipeline::{ReportOutput, RunSettings, Sources, run_report, write_outputs};
pub use shared::error::{AppError, AppResult, ErrorKind};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

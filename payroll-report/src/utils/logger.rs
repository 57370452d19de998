//! Logging Infrastructure
//!
//! Diagnostics go to stderr (and optionally a daily rolling file) so the
//! report printed on stdout stays clean.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
fn default_filter(level: &str) -> String {
    format!("payroll_report={level},timesheet_client={level},shared={level}")
}

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(log_path, "payroll-report");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
        eprintln!("LOG_DIR {} does not exist, logging to stderr", dir);
    }

    subscriber.with_writer(std::io::stderr).init();
}

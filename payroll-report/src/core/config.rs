use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

use crate::utils::dates::parse_date;

/// Spreadsheet holding cash withdrawal responses
#[derive(Debug, Clone, PartialEq)]
pub struct CashSheetConfig {
    pub sheet_id: String,
    pub sheet_name: String,
    /// Cell range, e.g. `2:1010`
    pub range: String,
    pub api_url: String,
    pub token: String,
}

/// Run configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | TIMESHEET_BASE_URL | https://api.getsling.com/v1 | scheduling service |
/// | TIMESHEET_EMAIL | (empty) | login email |
/// | TIMESHEET_PASSWORD | (empty) | login password |
/// | TIMESHEET_TOKEN | (unset) | fixed token, skips login |
/// | EXPORT_ROOT | ./exports | mounted order export tree |
/// | EXPORT_ID | 113866 | export feed id |
/// | CASH_SHEET_ID | (unset) | withdrawal spreadsheet; unset means prompt |
/// | CASH_SHEET_NAME | Withdrawals | sheet name |
/// | CASH_SHEET_RANGE | 2:1010 | cell range |
/// | SHEETS_API_URL | https://sheets.googleapis.com/v4 | sheets endpoint |
/// | SHEETS_TOKEN | (empty) | sheets bearer token |
/// | OUTPUT_DIR | . | report and payroll CSV destination |
/// | POLICY_PATH | payroll.json | commission employees and tip exclusions |
/// | TIPS_WITHHELD_PERCENTAGE | 0.03 | card fee withheld from tips |
/// | PAYROLL_TAX_RATE | 0.0765 | employer payroll tax on wages |
/// | REQUEST_TIMEOUT_SECS | 30 | HTTP and export read timeout |
/// | REPORT_END_DATE | (unset) | treat this date as today (YYYY-MM-DD) |
/// | LOG_LEVEL | info | log level |
/// | LOG_DIR | (unset) | daily rolling log file directory |
///
/// # Example
///
/// ```ignore
/// REPORT_END_DATE=2024-06-16 OUTPUT_DIR=/tmp cargo run -p payroll-report
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub timesheet_base_url: String,
    pub timesheet_email: String,
    pub timesheet_password: String,
    pub timesheet_token: Option<String>,
    pub export_root: PathBuf,
    pub export_id: String,
    /// `None` means cash withdrawals are entered at the prompt
    pub cash_sheet: Option<CashSheetConfig>,
    pub output_dir: PathBuf,
    pub policy_path: PathBuf,
    pub tips_withheld_percentage: Decimal,
    pub payroll_tax_rate: Decimal,
    pub request_timeout_secs: u64,
    pub report_end_date: Option<NaiveDate>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults; set but malformed values are
    /// an error.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let cash_sheet = var("CASH_SHEET_ID").map(|sheet_id| CashSheetConfig {
            sheet_id,
            sheet_name: or("CASH_SHEET_NAME", "Withdrawals"),
            range: or("CASH_SHEET_RANGE", "2:1010"),
            api_url: or("SHEETS_API_URL", "https://sheets.googleapis.com/v4"),
            token: or("SHEETS_TOKEN", ""),
        });

        let report_end_date = match var("REPORT_END_DATE") {
            Some(raw) => Some(parse_date(&raw).map_err(|_| {
                AppError::config(format!("REPORT_END_DATE must be YYYY-MM-DD, got {}", raw))
            })?),
            None => None,
        };

        Ok(Self {
            timesheet_base_url: or("TIMESHEET_BASE_URL", timesheet_client::config::DEFAULT_BASE_URL),
            timesheet_email: or("TIMESHEET_EMAIL", ""),
            timesheet_password: or("TIMESHEET_PASSWORD", ""),
            timesheet_token: var("TIMESHEET_TOKEN"),
            export_root: PathBuf::from(or("EXPORT_ROOT", "./exports")),
            export_id: or("EXPORT_ID", "113866"),
            cash_sheet,
            output_dir: PathBuf::from(or("OUTPUT_DIR", ".")),
            policy_path: PathBuf::from(or("POLICY_PATH", "payroll.json")),
            tips_withheld_percentage: parse_var(&var, "TIPS_WITHHELD_PERCENTAGE", Decimal::new(3, 2))?,
            payroll_tax_rate: parse_var(&var, "PAYROLL_TAX_RATE", Decimal::new(765, 4))?,
            request_timeout_secs: parse_var(&var, "REQUEST_TIMEOUT_SECS", 30)?,
            report_end_date,
            log_level: or("LOG_LEVEL", "info"),
            log_dir: var("LOG_DIR"),
        })
    }

    /// Client configuration for the scheduling service
    pub fn timesheet_client_config(&self) -> timesheet_client::ClientConfig {
        let config = timesheet_client::ClientConfig::new(&self.timesheet_base_url)
            .with_timeout(self.request_timeout_secs);
        match &self.timesheet_token {
            Some(token) => config.with_token(token),
            None => config,
        }
    }
}

fn parse_var<T: FromStr>(
    var: impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> AppResult<T> {
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{} has an invalid value: {}", key, raw))),
        None => Ok(default),
    }
}

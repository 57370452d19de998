//! payroll-report binary
//!
//! One fixed invocation per week: settings come from the environment (and an
//! optional `.env` file), the report goes to stdout and the output directory.

use std::process::ExitCode;
use std::time::Duration;

use chrono::Local;
use payroll_report::core::{Config, Policy};
use payroll_report::sources::{GoogleSheetsClient, LocalExportDir, SheetRowsSource};
use payroll_report::utils::dates::reporting_window;
use payroll_report::{
    AppError, AppResult, RunSettings, Sources, TerminalOperator, init_logger, init_logger_with_file,
    run_report, write_outputs,
};
use timesheet_client::TimesheetClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_logger();
            return fail(&e);
        }
    };
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn fail(e: &AppError) -> ExitCode {
    tracing::error!(
        code = e.kind.code(),
        category = e.kind.category().name(),
        details = ?e.details,
        "{}",
        e.message
    );
    if e.kind.category().is_business_rule() {
        eprintln!("payroll rule violated: {}", e);
    } else {
        eprintln!("error: {}", e);
    }
    ExitCode::FAILURE
}

async fn run(config: &Config) -> AppResult<()> {
    let policy = Policy::load(&config.policy_path)?;

    let today = config
        .report_end_date
        .unwrap_or_else(|| Local::now().date_naive());
    let dates = reporting_window(today);

    let mut timesheet = TimesheetClient::new(&config.timesheet_client_config())?;
    timesheet
        .ensure_logged_in(&config.timesheet_email, &config.timesheet_password)
        .await?;

    let timeout = Duration::from_secs(config.request_timeout_secs);
    let exports = LocalExportDir::new(&config.export_root, timeout);
    let sheets = match &config.cash_sheet {
        Some(sheet) => Some(GoogleSheetsClient::new(&sheet.api_url, &sheet.token, timeout)?),
        None => None,
    };

    let sources = Sources {
        timesheet: &timesheet,
        exports: &exports,
        sheets: sheets.as_ref().map(|s| s as &dyn SheetRowsSource),
    };
    let mut operator = TerminalOperator::stdin();

    let output = run_report(
        &dates,
        &policy,
        &RunSettings::from_config(config),
        &sources,
        &mut operator,
    )
    .await?;

    println!("{}", output.report);
    write_outputs(&config.output_dir, &output).await?;
    Ok(())
}

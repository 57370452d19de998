//! End-to-end weekly run
//!
//! fetch -> aggregate -> reconcile -> pay -> render. Nothing is written
//! until [`write_outputs`], so a failed run leaves no files behind.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{CashWithdrawals, DailySummary, EmployeeDirectory, PayrollEntry};

use crate::core::{CashSheetConfig, Config, Policy};
use crate::delivery::reconcile_deliveries;
use crate::operator::OperatorInput;
use crate::orders::{build_daily_summary, parse_order_details};
use crate::payroll::cash::{prompt_withdrawals, rows_to_withdrawals};
use crate::payroll::{
    build_directory, build_timesheet, calculate_weekly_summary, commission_statements, labor_costs,
    payroll_entries, write_payroll_csv,
};
use crate::report::{ReportData, ReportRenderer};
use crate::sources::{OrderExportSource, SheetRowsSource, TimesheetService, export_path};

/// Per-run settings taken from [`Config`]
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub export_id: String,
    pub tips_withheld_percentage: Decimal,
    pub payroll_tax_rate: Decimal,
    /// Read cash withdrawals from this sheet instead of prompting
    pub cash_sheet: Option<CashSheetConfig>,
    pub report_width: usize,
}

impl RunSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            export_id: config.export_id.clone(),
            tips_withheld_percentage: config.tips_withheld_percentage,
            payroll_tax_rate: config.payroll_tax_rate,
            cash_sheet: config.cash_sheet.clone(),
            report_width: 48,
        }
    }
}

/// External sources for one run
pub struct Sources<'a> {
    pub timesheet: &'a dyn TimesheetService,
    pub exports: &'a dyn OrderExportSource,
    /// Required when [`RunSettings::cash_sheet`] is set
    pub sheets: Option<&'a dyn SheetRowsSource>,
}

/// Rendered run results, not yet written
#[derive(Debug, Clone)]
pub struct ReportOutput {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub report: String,
    pub payroll: Vec<PayrollEntry>,
}

/// Run the weekly report over `dates` (chronological, non-empty)
pub async fn run_report(
    dates: &[NaiveDate],
    policy: &Policy,
    settings: &RunSettings,
    sources: &Sources<'_>,
    operator: &mut dyn OperatorInput,
) -> AppResult<ReportOutput> {
    let (Some(&from), Some(&to)) = (dates.first(), dates.last()) else {
        return Err(AppError::validation("no reporting dates"));
    };
    tracing::info!(%from, %to, "Starting weekly report");

    // Employees and shifts
    let users = sources.timesheet.list_users().await?;
    let directory = build_directory(users, policy);
    let records = sources.timesheet.timesheet_entries(from, to).await?;
    let timesheet = build_timesheet(&records, &directory, &policy.tip_exclusions)?;
    tracing::info!(
        employees = directory.len(),
        shifts = records.len(),
        "Loaded timesheet"
    );

    // Orders per date
    let mut dailies: BTreeMap<NaiveDate, DailySummary> = BTreeMap::new();
    for &date in dates {
        let bytes = sources
            .exports
            .download(&export_path(&settings.export_id, date))
            .await?;
        let orders = parse_order_details(&bytes)
            .map_err(|e| AppError::with_message(e.kind, format!("{}: {}", date, e.message)))?;
        dailies.insert(
            date,
            build_daily_summary(date, orders, settings.tips_withheld_percentage),
        );
    }

    // Deliveries, then the weekly totals net of unpaid orders
    let ledger = reconcile_deliveries(&dailies, operator)?;
    let mut summary = calculate_weekly_summary(
        &dailies,
        &timesheet.timesheet,
        timesheet.hours,
        ledger.unpaid_total(settings.tips_withheld_percentage),
    )?;

    let cash = load_cash(settings, sources, operator, &directory, from, to).await?;
    let statements = commission_statements(&mut summary, &directory, &cash, operator)?;
    let costs = labor_costs(&summary, &directory, settings.payroll_tax_rate)?;
    let payroll = payroll_entries(&summary, &directory)?;

    let report = ReportRenderer::new(settings.report_width).render(&ReportData {
        dailies: &dailies,
        ledger: &ledger,
        summary: &summary,
        costs: &costs,
        cash: &cash,
        statements: &statements,
        directory: &directory,
        tips_withheld_percentage: settings.tips_withheld_percentage,
    });

    tracing::info!(
        sales = %summary.sales,
        payroll_rows = payroll.len(),
        "Weekly report ready"
    );
    Ok(ReportOutput {
        from,
        to,
        report,
        payroll,
    })
}

async fn load_cash(
    settings: &RunSettings,
    sources: &Sources<'_>,
    operator: &mut dyn OperatorInput,
    directory: &EmployeeDirectory,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<CashWithdrawals> {
    match (&settings.cash_sheet, sources.sheets) {
        (Some(sheet), Some(rows_source)) => {
            let rows = rows_source
                .fetch_rows(&sheet.sheet_id, &sheet.sheet_name, &sheet.range)
                .await?;
            rows_to_withdrawals(rows, from, to, directory)
        }
        (Some(_), None) => Err(AppError::config("cash sheet configured without a sheets source")),
        (None, _) => prompt_withdrawals(operator, directory, to),
    }
}

/// Write `report_{to}.txt` and `payroll_{to}.csv` into `dir`.
///
/// Both files are written to temporaries first and renamed into place
/// only after both writes succeed. A failed rename removes whatever was
/// already moved into place.
pub async fn write_outputs(dir: &Path, output: &ReportOutput) -> AppResult<(PathBuf, PathBuf)> {
    let mut csv = Vec::new();
    write_payroll_csv(&mut csv, &output.payroll)?;

    let report_path = dir.join(format!("report_{}.txt", output.to));
    let payroll_path = dir.join(format!("payroll_{}.csv", output.to));
    let files = [
        (payroll_path.clone(), csv.as_slice()),
        (report_path.clone(), output.report.as_bytes()),
    ];

    tokio::fs::create_dir_all(dir).await?;

    let mut staged = Vec::with_capacity(files.len());
    for (path, bytes) in &files {
        let tmp_path = path.with_extension("tmp");
        if let Err(e) = tokio::fs::write(&tmp_path, *bytes).await {
            for (tmp, _) in &staged {
                let _ = tokio::fs::remove_file(tmp).await;
            }
            return Err(AppError::io(format!("failed to write {}: {}", tmp_path.display(), e)));
        }
        staged.push((tmp_path, path.clone()));
    }

    for (i, (tmp_path, path)) in staged.iter().enumerate() {
        if let Err(e) = tokio::fs::rename(tmp_path, path).await {
            for (_, placed) in &staged[..i] {
                let _ = tokio::fs::remove_file(placed).await;
            }
            for (tmp, _) in &staged[i..] {
                let _ = tokio::fs::remove_file(tmp).await;
            }
            return Err(AppError::io(format!("failed to move {} into place: {}", path.display(), e)));
        }
    }

    tracing::info!(
        report = %report_path.display(),
        payroll = %payroll_path.display(),
        "Wrote report outputs"
    );
    Ok((report_path, payroll_path))
}

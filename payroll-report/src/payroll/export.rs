//! Payroll CSV export

use std::io::{Read, Write};

use shared::error::{AppError, AppResult, ErrorKind};
use shared::models::{EmployeeDirectory, PayrollEntry, WeeklySummary};

/// Payroll rows for every hourly employee: a regular pay row, then a
/// controlled tips row when the employee has a tip share.
///
/// Fails with [`ErrorKind::EmployeeNumberMissing`] when an hourly employee
/// has no payroll number, and [`ErrorKind::EmployeeRateMissing`] when it has
/// no pay rate.
pub fn payroll_entries(
    summary: &WeeklySummary,
    directory: &EmployeeDirectory,
) -> AppResult<Vec<PayrollEntry>> {
    let mut entries = Vec::new();

    for hours in &summary.hours {
        let employee = directory
            .get(hours.employee_id)
            .ok_or_else(|| AppError::employee_not_found(hours.employee_id.0))?;
        let Some(number) = employee.employee_number.as_deref().filter(|n| !n.trim().is_empty()) else {
            return Err(AppError::with_message(
                ErrorKind::EmployeeNumberMissing,
                format!("{} has no payroll employee number", employee.name()),
            )
            .with_detail("employee_id", employee.id.0));
        };

        entries.push(PayrollEntry::regular(number, hours.hours, employee.hourly_rate()?));

        let tips = summary.tips.share_of(employee.id);
        if tips > rust_decimal::Decimal::ZERO {
            entries.push(PayrollEntry::controlled_tips(number, tips));
        }
    }

    Ok(entries)
}

/// Write entries with a header row
pub fn write_payroll_csv<W: Write>(writer: W, entries: &[PayrollEntry]) -> AppResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for entry in entries {
        csv.serialize(entry).map_err(csv_error)?;
    }
    csv.flush()?;
    Ok(())
}

/// Read entries written by [`write_payroll_csv`]
pub fn read_payroll_csv<R: Read>(reader: R) -> AppResult<Vec<PayrollEntry>> {
    csv::Reader::from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<PayrollEntry>, _>>()
        .map_err(csv_error)
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::invalid_format(format!("payroll csv: {}", e))
}

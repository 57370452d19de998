//! Scheduling records into a weekly timesheet

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorKind};
use shared::models::{Employee, EmployeeDirectory, EmployeeHours, EmployeeId, Shift, TipExclusion, Timesheet};
use timesheet_client::{ShiftRecord, UserRecord};

use crate::core::Policy;

/// Timesheet plus paid hours for hourly employees
#[derive(Debug, Clone, Default)]
pub struct TimesheetData {
    pub timesheet: Timesheet,
    /// Sorted by employee id; commission employees are left out
    pub hours: Vec<EmployeeHours>,
}

/// Employee directory from the scheduling users, with commission tiers
/// attached by email
pub fn build_directory(users: Vec<UserRecord>, policy: &Policy) -> EmployeeDirectory {
    EmployeeDirectory::new(users.into_iter().map(|user| {
        let commission = policy.commission_for(&user.email).cloned();
        if commission.is_some() {
            tracing::debug!(email = %user.email, "Commission based employee");
        }
        Employee {
            id: EmployeeId(user.id),
            employee_number: user.employee_number,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            is_active: user.active,
            rate: user.rate,
            commission,
        }
    }))
}

/// Convert shift records into the weekly timesheet.
///
/// - records with zero paid minutes are skipped
/// - a record for an unknown user fails with [`ErrorKind::EmployeeNotFound`]
/// - an unapproved shift fails with [`ErrorKind::UnapprovedShift`] unless the
///   employee is commission based
/// - a tip exclusion for (employee, weekday) marks the shift untipped
pub fn build_timesheet(
    records: &[ShiftRecord],
    directory: &EmployeeDirectory,
    exclusions: &[TipExclusion],
) -> AppResult<TimesheetData> {
    let mut timesheet = Timesheet::new();
    let mut minutes: BTreeMap<EmployeeId, i64> = BTreeMap::new();

    for record in records {
        if record.paid_minutes == 0 {
            continue;
        }

        let employee = directory
            .get(EmployeeId(record.user_id))
            .ok_or_else(|| AppError::employee_not_found(record.user_id))?;

        if !record.approved {
            if employee.is_commission_based() {
                tracing::debug!(
                    employee = %employee.name(),
                    clock_in = %record.clock_in,
                    "Allowing unapproved shift for commission based employee"
                );
            } else {
                return Err(AppError::with_message(
                    ErrorKind::UnapprovedShift,
                    format!(
                        "unapproved shift found for {} from {} -> {}",
                        employee.name(),
                        record.clock_in,
                        record.clock_out
                    ),
                )
                .with_detail("employee_id", employee.id.0));
            }
        }

        let weekday = record.clock_in.weekday();
        let excluded = exclusions
            .iter()
            .any(|e| e.employee_id == employee.id && e.weekday == weekday);

        timesheet.add(
            weekday,
            employee.id,
            Shift::new(record.clock_in, record.clock_out, !excluded),
        );

        if !employee.is_commission_based() {
            *minutes.entry(employee.id).or_default() += record.paid_minutes;
        }
    }

    let hours = minutes
        .into_iter()
        .map(|(employee_id, paid_minutes)| EmployeeHours {
            employee_id,
            hours: Decimal::from(paid_minutes) / Decimal::from(60),
        })
        .collect();

    Ok(TimesheetData { timesheet, hours })
}

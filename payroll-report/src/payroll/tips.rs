//! Tip pooling
//!
//! Each tipped shift earns share units by length. A day's tips are split by
//! units among everyone scheduled that weekday.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, TimeDelta};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorKind};
use shared::models::{DailySummary, EmployeeId, Schedule, TipDetails, Timesheet};

/// Share units for a shift of `worked` length
pub fn tip_share(worked: TimeDelta) -> u32 {
    if worked >= TimeDelta::hours(6) {
        3
    } else if worked >= TimeDelta::hours(4) {
        2
    } else if worked >= TimeDelta::hours(2) {
        1
    } else {
        0
    }
}

/// Units per scheduled employee; employees with only untipped shifts get 0
fn share_units(schedule: &Schedule) -> BTreeMap<EmployeeId, u32> {
    schedule
        .shifts
        .iter()
        .map(|(employee_id, shifts)| {
            let units: u32 = shifts
                .iter()
                .filter(|s| s.tipped)
                .map(|s| tip_share(s.duration()))
                .sum();
            (*employee_id, units)
        })
        .collect()
}

/// Split every date's tips across the timesheet.
///
/// A date with no share units and no tips is skipped. A date with tips but
/// no share units fails with [`ErrorKind::EmptyTipPool`].
pub fn distribute_tips(
    dailies: &BTreeMap<NaiveDate, DailySummary>,
    timesheet: &Timesheet,
) -> AppResult<TipDetails> {
    let mut tips = TipDetails::default();

    for (date, daily) in dailies {
        let units = timesheet
            .schedule(date.weekday())
            .map(share_units)
            .unwrap_or_default();
        let pool: u32 = units.values().sum();

        if pool == 0 {
            if daily.tips.is_zero() {
                tracing::debug!(%date, "No tips and no tip shares, skipping");
                continue;
            }
            return Err(AppError::with_message(
                ErrorKind::EmptyTipPool,
                format!("{} has {} in tips but nobody worked a tipped shift", date, daily.tips.round_dp(2)),
            )
            .with_detail("date", date.to_string())
            .with_detail("tips", daily.tips.round_dp(2).to_string()));
        }

        let pool = Decimal::from(pool);
        for (employee_id, employee_units) in units {
            tips.credit(employee_id, Decimal::from(employee_units) / pool * daily.tips);
        }
        tips.total += daily.tips;
    }

    Ok(tips)
}

//! Cash withdrawals from the withdrawal sheet or the operator

use chrono::{NaiveDate, NaiveDateTime};
use shared::error::{AppError, AppResult, ErrorKind};
use shared::models::{CashWithdrawal, CashWithdrawals, EmployeeDirectory};
use shared::util::parse_money;

use crate::operator::OperatorInput;

/// Timestamp formats the sheet has used over time
const TIMESTAMP_FORMATS: [&str; 2] = ["%m/%d/%Y %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse a sheet timestamp cell
pub fn parse_sheet_timestamp(raw: &str) -> AppResult<NaiveDateTime> {
    let raw = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| AppError::invalid_format(format!("invalid withdrawal timestamp {:?}", raw)))
}

/// Convert sheet rows (`timestamp, amount, recipient`) into withdrawals
/// dated within `[from, to]`.
///
/// Blank rows are skipped. Every other row must carry a valid timestamp;
/// amount and recipient are only checked for rows inside the window.
/// Recipients are resolved against the directory by name.
pub fn rows_to_withdrawals(
    rows: Vec<Vec<String>>,
    from: NaiveDate,
    to: NaiveDate,
    directory: &EmployeeDirectory,
) -> AppResult<CashWithdrawals> {
    let mut withdrawals = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let row_error = |message: String| {
            AppError::with_message(ErrorKind::InvalidFormat, format!("row {}: {}", index + 1, message))
                .with_detail("row", index + 1)
        };

        let timestamp = parse_sheet_timestamp(&row[0]).map_err(|e| row_error(e.message))?;
        let date = timestamp.date();
        if date < from || date > to {
            continue;
        }

        let (Some(amount), Some(recipient)) = (row.get(1), row.get(2)) else {
            return Err(row_error("missing amount or recipient".to_string()));
        };
        let amount = parse_money(amount)
            .map_err(|_| row_error(format!("invalid withdrawal amount {:?}", amount)))?;
        let recipient = recipient.trim().to_string();
        if recipient.is_empty() {
            return Err(row_error("missing recipient".to_string()));
        }

        let employee_id = directory.find_by_name(&recipient).map(|e| e.id);
        if employee_id.is_none() {
            tracing::debug!(%recipient, "Withdrawal recipient is not a known employee");
        }

        withdrawals.push(CashWithdrawal {
            timestamp,
            amount,
            recipient,
            employee_id,
        });
    }

    tracing::info!(count = withdrawals.len(), %from, %to, "Loaded cash withdrawals");
    Ok(CashWithdrawals(withdrawals))
}

/// Ask the operator for the cash each commission employee holds.
///
/// Amounts are entered one at a time until `0`; every amount is dated `date`.
pub fn prompt_withdrawals(
    operator: &mut dyn OperatorInput,
    directory: &EmployeeDirectory,
    date: NaiveDate,
) -> AppResult<CashWithdrawals> {
    let timestamp = date.and_time(chrono::NaiveTime::MIN);
    let mut withdrawals = Vec::new();

    for employee in directory.commission_based() {
        let prompt = format!("Enter cash held by {} (0 when done)", employee.name());
        loop {
            let amount = operator.dollar_amount(&prompt)?;
            if amount.is_zero() {
                break;
            }
            withdrawals.push(CashWithdrawal {
                timestamp,
                amount,
                recipient: employee.name(),
                employee_id: Some(employee.id),
            });
        }
    }

    Ok(CashWithdrawals(withdrawals))
}

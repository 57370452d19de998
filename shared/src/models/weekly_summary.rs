//! Weekly summary

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::employee::{EmployeeHours, EmployeeId};

/// Pooled tips per employee plus the grand total
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TipDetails {
    pub details: BTreeMap<EmployeeId, Decimal>,
    pub total: Decimal,
}

impl TipDetails {
    /// Share for `employee_id`, zero when it never appeared in a schedule
    pub fn share_of(&self, employee_id: EmployeeId) -> Decimal {
        self.details.get(&employee_id).copied().unwrap_or_default()
    }

    pub fn credit(&mut self, employee_id: EmployeeId, amount: Decimal) {
        *self.details.entry(employee_id).or_default() += amount;
    }
}

/// Pay for an employee paid outside of hourly payroll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashEmployeePay {
    pub employee_id: EmployeeId,
    pub name: String,
    pub net_pay: Decimal,
    pub taxes: Decimal,
}

impl CashEmployeePay {
    pub fn total_compensation(&self) -> Decimal {
        self.net_pay + self.taxes
    }
}

/// Aggregate for the whole reporting window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub sales: Decimal,
    pub sales_tax: Decimal,
    pub tips: TipDetails,
    pub hours: Vec<EmployeeHours>,
    pub cash_employees_pay: Vec<CashEmployeePay>,
}

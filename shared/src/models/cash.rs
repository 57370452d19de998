//! Cash withdrawals

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::employee::EmployeeId;

/// Cash taken out of the register by an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashWithdrawal {
    pub timestamp: NaiveDateTime,
    pub amount: Decimal,
    /// Name as entered on the withdrawal sheet
    pub recipient: String,
    /// Set when the recipient matches a known employee
    pub employee_id: Option<EmployeeId>,
}

/// All withdrawals for a reporting window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashWithdrawals(pub Vec<CashWithdrawal>);

impl CashWithdrawals {
    /// Total per recipient name
    pub fn sum_by_recipient(&self) -> BTreeMap<String, Decimal> {
        let mut totals = BTreeMap::new();
        for w in &self.0 {
            *totals.entry(w.recipient.clone()).or_insert(Decimal::ZERO) += w.amount;
        }
        totals
    }

    /// Individual amounts held by `employee_id`, in sheet order
    pub fn held_by(&self, employee_id: EmployeeId) -> Vec<Decimal> {
        self.0
            .iter()
            .filter(|w| w.employee_id == Some(employee_id))
            .map(|w| w.amount)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

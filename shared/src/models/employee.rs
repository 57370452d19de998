//! Employee Model

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::commission::CommissionSalesStructure;
use crate::error::{AppError, AppResult, ErrorKind};

/// Stable employee identity (the scheduling service user id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EmployeeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    /// Payroll provider employee number
    pub employee_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
    /// Base hourly rate, `None` when the scheduling service has none
    pub rate: Option<Decimal>,
    /// Present only for commission-based employees
    pub commission: Option<CommissionSalesStructure>,
}

impl Employee {
    /// Display name, `first last`
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn is_commission_based(&self) -> bool {
        self.commission.is_some()
    }

    /// Rate for paid hours; missing or zero is [`ErrorKind::EmployeeRateMissing`]
    pub fn hourly_rate(&self) -> AppResult<Decimal> {
        match self.rate {
            Some(rate) if rate > Decimal::ZERO => Ok(rate),
            _ => Err(AppError::with_message(
                ErrorKind::EmployeeRateMissing,
                format!("{} has hours but no hourly rate", self.name()),
            )
            .with_detail("employee_id", self.id.0)),
        }
    }
}

/// All known employees keyed by id
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: BTreeMap<EmployeeId, Employee>,
}

impl EmployeeDirectory {
    pub fn new(employees: impl IntoIterator<Item = Employee>) -> Self {
        Self {
            employees: employees.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    /// Display name for `id`, falling back to the raw id
    pub fn name_of(&self, id: EmployeeId) -> String {
        self.get(id)
            .map(Employee::name)
            .unwrap_or_else(|| format!("#{}", id))
    }

    /// Case-insensitive match on the display name or first name
    pub fn find_by_name(&self, name: &str) -> Option<&Employee> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.employees
            .values()
            .find(|e| e.name().to_lowercase() == wanted)
            .or_else(|| {
                self.employees
                    .values()
                    .find(|e| e.first_name.to_lowercase() == wanted)
            })
    }

    pub fn commission_based(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values().filter(|e| e.is_commission_based())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// Shifts worked by `employee_id` on `weekday` are never tipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipExclusion {
    pub employee_id: EmployeeId,
    pub weekday: Weekday,
}

/// Paid hours for one hourly employee over the reporting window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeHours {
    pub employee_id: EmployeeId,
    pub hours: Decimal,
}

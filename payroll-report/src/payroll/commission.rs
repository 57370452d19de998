//! Commission pay statements

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{CashEmployeePay, CashWithdrawals, EmployeeDirectory, EmployeeId, WeeklySummary};
use shared::util::format_money;

use crate::operator::OperatorInput;

/// Weekly pay for one commission-based employee
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionStatement {
    pub employee_id: EmployeeId,
    pub name: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub net_sales: Decimal,
    /// Pooled tip share
    pub tips: Decimal,
    /// Matched tier rate as a fraction
    pub percentage: Decimal,
    /// Every cash amount the employee already took, in sheet order
    pub cash_held: Vec<Decimal>,
    /// Operator-entered withholding
    pub taxes: Decimal,
}

impl CommissionStatement {
    pub fn commission(&self) -> Decimal {
        self.net_sales * self.percentage
    }

    pub fn pretax_pay(&self) -> Decimal {
        self.commission() + self.tips
    }

    pub fn net_pay(&self) -> Decimal {
        self.pretax_pay() - self.taxes
    }

    pub fn total_cash_held(&self) -> Decimal {
        self.cash_held.iter().copied().sum()
    }

    /// Left to pay after the cash already held; negative means overdrawn
    pub fn deposit(&self) -> Decimal {
        self.net_pay() - self.total_cash_held()
    }
}

/// Build a statement per commission employee and record each as cash pay
/// on the summary.
///
/// Fails with `NoCommissionTierMatched` when weekly sales fall outside every
/// tier of an employee.
pub fn commission_statements(
    summary: &mut WeeklySummary,
    directory: &EmployeeDirectory,
    cash: &CashWithdrawals,
    operator: &mut dyn OperatorInput,
) -> AppResult<Vec<CommissionStatement>> {
    let mut statements = Vec::new();

    for employee in directory.commission_based() {
        let Some(tiers) = employee.commission.as_ref() else {
            continue;
        };
        let percentage = tiers.percentage_for(summary.sales).map_err(|e| {
            AppError::with_message(e.kind, format!("{}: {}", employee.name(), e.message))
                .with_detail("employee_id", employee.id.0)
        })?;

        let mut statement = CommissionStatement {
            employee_id: employee.id,
            name: employee.name(),
            from: summary.from,
            to: summary.to,
            net_sales: summary.sales,
            tips: summary.tips.share_of(employee.id),
            percentage,
            cash_held: cash.held_by(employee.id),
            taxes: Decimal::ZERO,
        };
        statement.taxes = operator.dollar_amount(&format!(
            "Enter taxes for {} with pretax pay {}",
            statement.name,
            format_money(statement.pretax_pay())
        ))?;

        tracing::info!(
            employee = %statement.name,
            percentage = %statement.percentage,
            net_pay = %statement.net_pay(),
            deposit = %statement.deposit(),
            "Commission statement"
        );

        summary.cash_employees_pay.push(CashEmployeePay {
            employee_id: statement.employee_id,
            name: statement.name.clone(),
            net_pay: statement.net_pay(),
            taxes: statement.taxes,
        });
        statements.push(statement);
    }

    Ok(statements)
}

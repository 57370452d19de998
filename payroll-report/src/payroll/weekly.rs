//! Weekly aggregation and labor costs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{
    CashEmployeePay, DailySummary, EmployeeDirectory, EmployeeHours, EmployeeId, Timesheet,
    WeeklySummary,
};

use super::tips::distribute_tips;

/// Roll the daily summaries up into the weekly summary.
///
/// `unpaid_total` (gross of delivery orders confirmed unpaid) comes off
/// weekly sales once. Tips are pooled over `timesheet`.
pub fn calculate_weekly_summary(
    dailies: &BTreeMap<NaiveDate, DailySummary>,
    timesheet: &Timesheet,
    hours: Vec<EmployeeHours>,
    unpaid_total: Decimal,
) -> AppResult<WeeklySummary> {
    let (Some(from), Some(to)) = (dailies.keys().next(), dailies.keys().next_back()) else {
        return Err(AppError::validation("no daily summaries to aggregate"));
    };

    let gross_sales: Decimal = dailies.values().map(|d| d.sales).sum();
    let sales_tax: Decimal = dailies.values().map(|d| d.sales_tax).sum();
    let tips = distribute_tips(dailies, timesheet)?;

    tracing::info!(
        %from,
        %to,
        gross_sales = %gross_sales,
        unpaid = %unpaid_total,
        tips = %tips.total,
        "Weekly totals"
    );

    Ok(WeeklySummary {
        from: *from,
        to: *to,
        sales: gross_sales - unpaid_total,
        sales_tax,
        tips,
        hours,
        cash_employees_pay: Vec::new(),
    })
}

/// Wage line for one hourly employee
#[derive(Debug, Clone, PartialEq)]
pub struct WageLine {
    pub employee_id: EmployeeId,
    pub name: String,
    pub hours: Decimal,
    pub rate: Decimal,
    pub wage: Decimal,
    pub tips: Decimal,
    pub payroll_tax: Decimal,
}

impl WageLine {
    pub fn total_compensation(&self) -> Decimal {
        self.wage + self.tips
    }
}

/// Employer-side cost of the week
#[derive(Debug, Clone, PartialEq)]
pub struct LaborCosts {
    pub hourly: Vec<WageLine>,
    pub cash: Vec<CashEmployeePay>,
    /// Hourly wages plus cash employees' pay and taxes
    pub wages: Decimal,
    pub payroll_taxes: Decimal,
    pub net_sales: Decimal,
}

impl LaborCosts {
    pub fn total(&self) -> Decimal {
        self.wages + self.payroll_taxes
    }

    /// Total cost as a fraction of net sales; `None` without sales
    pub fn percentage_of_sales(&self) -> Option<Decimal> {
        if self.net_sales.is_zero() {
            None
        } else {
            Some(self.total() / self.net_sales)
        }
    }
}

/// Wages and payroll taxes for the summary.
///
/// Hourly employees are taxed at `payroll_tax_rate` on wages. Cash employees
/// count their full compensation toward wages and their taxes again toward
/// payroll taxes.
pub fn labor_costs(
    summary: &WeeklySummary,
    directory: &EmployeeDirectory,
    payroll_tax_rate: Decimal,
) -> AppResult<LaborCosts> {
    let mut hourly = Vec::with_capacity(summary.hours.len());
    for entry in &summary.hours {
        let employee = directory
            .get(entry.employee_id)
            .ok_or_else(|| AppError::employee_not_found(entry.employee_id.0))?;
        let rate = employee.hourly_rate()?;
        let wage = entry.hours * rate;
        hourly.push(WageLine {
            employee_id: employee.id,
            name: employee.name(),
            hours: entry.hours,
            rate,
            wage,
            tips: summary.tips.share_of(employee.id),
            payroll_tax: wage * payroll_tax_rate,
        });
    }

    let cash = summary.cash_employees_pay.clone();
    let wages = hourly.iter().map(|l| l.wage).sum::<Decimal>()
        + cash.iter().map(CashEmployeePay::total_compensation).sum::<Decimal>();
    let payroll_taxes = hourly.iter().map(|l| l.payroll_tax).sum::<Decimal>()
        + cash.iter().map(|c| c.taxes).sum::<Decimal>();

    Ok(LaborCosts {
        hourly,
        cash,
        wages,
        payroll_taxes,
        net_sales: summary.sales,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeDelta, Weekday};
    use shared::error::ErrorKind;
    use shared::models::{Employee, Shift};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn daily(d: u32, sales: i64, tax: i64, tips: i64) -> (NaiveDate, DailySummary) {
        let mut daily = DailySummary::empty(date(d));
        daily.sales = Decimal::from(sales);
        daily.sales_tax = Decimal::from(tax);
        daily.tips = Decimal::from(tips);
        (date(d), daily)
    }

    fn timesheet() -> Timesheet {
        let start = DateTime::parse_from_rfc3339("2024-06-12T10:00:00-04:00").unwrap();
        let mut timesheet = Timesheet::new();
        for weekday in [Weekday::Wed, Weekday::Thu] {
            timesheet.add(weekday, EmployeeId(1), Shift::new(start, start + TimeDelta::hours(6), true));
        }
        timesheet
    }

    fn employee(id: i64, rate: i64) -> Employee {
        Employee {
            id: EmployeeId(id),
            employee_number: Some(format!("{:03}", id)),
            first_name: format!("E{}", id),
            last_name: String::new(),
            email: String::new(),
            is_active: true,
            rate: Some(Decimal::from(rate)),
            commission: None,
        }
    }

    #[test]
    fn test_weekly_summary_nets_unpaid_once() {
        let dailies: BTreeMap<_, _> = vec![daily(13, 200, 16, 20), daily(12, 100, 8, 10)]
            .into_iter()
            .collect();
        let hours = vec![EmployeeHours { employee_id: EmployeeId(1), hours: Decimal::from(12) }];

        let summary = calculate_weekly_summary(&dailies, &timesheet(), hours, Decimal::from(59)).unwrap();

        assert_eq!(summary.from, date(12));
        assert_eq!(summary.to, date(13));
        assert_eq!(summary.sales, Decimal::from(241));
        assert_eq!(summary.sales_tax, Decimal::from(24));
        assert_eq!(summary.tips.total, Decimal::from(30));
        assert_eq!(summary.tips.share_of(EmployeeId(1)), Decimal::from(30));
        assert_eq!(summary.hours.len(), 1);
        assert!(summary.cash_employees_pay.is_empty());
    }

    #[test]
    fn test_weekly_summary_requires_dates() {
        let err = calculate_weekly_summary(&BTreeMap::new(), &Timesheet::new(), Vec::new(), Decimal::ZERO)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValidationFailed);
    }

    fn summary(sales: i64) -> WeeklySummary {
        let mut summary = WeeklySummary {
            from: date(12),
            to: date(16),
            sales: Decimal::from(sales),
            sales_tax: Decimal::ZERO,
            tips: Default::default(),
            hours: vec![
                EmployeeHours { employee_id: EmployeeId(1), hours: Decimal::from(10) },
                EmployeeHours { employee_id: EmployeeId(2), hours: Decimal::new(205, 1) },
            ],
            cash_employees_pay: vec![CashEmployeePay {
                employee_id: EmployeeId(7),
                name: "Tanya".to_string(),
                net_pay: Decimal::from(500),
                taxes: Decimal::from(50),
            }],
        };
        summary.tips.credit(EmployeeId(1), Decimal::from(80));
        summary
    }

    #[test]
    fn test_labor_costs() {
        let directory = EmployeeDirectory::new(vec![employee(1, 15), employee(2, 20)]);
        let costs = labor_costs(&summary(4000), &directory, Decimal::new(765, 4)).unwrap();

        // 150 + 410 hourly, 550 cash
        assert_eq!(costs.wages, Decimal::from(1110));
        // 560 * 0.0765 + 50
        assert_eq!(costs.payroll_taxes, Decimal::new(92840, 3));
        assert_eq!(costs.total(), Decimal::new(1202840, 3));
        assert_eq!(costs.percentage_of_sales(), Some(Decimal::new(1202840, 3) / Decimal::from(4000)));

        assert_eq!(costs.hourly[0].total_compensation(), Decimal::from(230));
        assert_eq!(costs.hourly[1].tips, Decimal::ZERO);
        assert_eq!(costs.cash.len(), 1);
    }

    #[test]
    fn test_labor_costs_without_sales() {
        let directory = EmployeeDirectory::new(vec![employee(1, 15), employee(2, 20)]);
        let costs = labor_costs(&summary(0), &directory, Decimal::new(765, 4)).unwrap();
        assert_eq!(costs.percentage_of_sales(), None);
    }

    #[test]
    fn test_labor_costs_unknown_employee() {
        let directory = EmployeeDirectory::new(vec![employee(1, 15)]);
        let err = labor_costs(&summary(100), &directory, Decimal::ZERO).unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmployeeNotFound);
    }

    #[test]
    fn test_labor_costs_rejects_missing_rate() {
        let mut second = employee(2, 20);
        second.rate = None;
        let directory = EmployeeDirectory::new(vec![employee(1, 15), second]);
        let err = labor_costs(&summary(100), &directory, Decimal::ZERO).unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmployeeRateMissing);
    }
}

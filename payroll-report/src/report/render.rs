//! Weekly report renderer

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{CashWithdrawals, DailySummary, EmployeeDirectory, OrderSummary, ThirdPartyMerchantOrders, WeeklySummary};
use shared::util::{format_money, format_percentage};

use super::builder::ReportBuilder;
use crate::delivery::DeliveryLedger;
use crate::orders::summarize;
use crate::payroll::{CommissionStatement, LaborCosts};
use crate::utils::dates::day_heading;

/// Everything a weekly report shows
pub struct ReportData<'a> {
    pub dailies: &'a BTreeMap<NaiveDate, DailySummary>,
    pub ledger: &'a DeliveryLedger,
    pub summary: &'a WeeklySummary,
    pub costs: &'a LaborCosts,
    pub cash: &'a CashWithdrawals,
    pub statements: &'a [CommissionStatement],
    pub directory: &'a EmployeeDirectory,
    pub tips_withheld_percentage: Decimal,
}

/// Weekly report renderer
///
/// Sections in order: header, one block per date, weekly summary, tips and
/// wages breakdowns, cash held, commission statements, delivery listings.
pub struct ReportRenderer {
    width: usize,
}

impl ReportRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn render(&self, data: &ReportData<'_>) -> String {
        let mut b = ReportBuilder::new(self.width);

        self.render_header(&mut b, data.summary);
        for (date, daily) in data.dailies {
            self.render_day(&mut b, *date, daily, data.tips_withheld_percentage);
        }
        self.render_summary(&mut b, data.summary, data.costs);
        self.render_tips(&mut b, data.summary, data.directory);
        self.render_wages(&mut b, data.costs);
        self.render_cash(&mut b, data.cash);
        for statement in data.statements {
            self.render_statement(&mut b, statement);
        }
        self.render_deliveries(&mut b, "Paid Delivery Orders", &data.ledger.paid);
        self.render_deliveries(&mut b, "Unpaid Delivery Orders", &data.ledger.unpaid);

        b.build()
    }

    fn render_header(&self, b: &mut ReportBuilder, summary: &WeeklySummary) {
        b.sep_double();
        b.line(&format!(
            "Weekly Report {} - {}",
            summary.from.format("%m/%d/%Y"),
            summary.to.format("%m/%d/%Y")
        ));
        b.sep_double();
        b.newline();
    }

    fn render_day(&self, b: &mut ReportBuilder, date: NaiveDate, daily: &DailySummary, withheld: Decimal) {
        b.heading(&day_heading(date));

        let mut group_lines = Vec::with_capacity(daily.order_groups.len());
        for (group, orders) in &daily.order_groups {
            let summary = summarize(orders, withheld);
            if summary.voids > 0 {
                b.line(&format!("{} voided {} order(s)", group, summary.voids));
            }
            if !summary.missed_payments.is_empty() {
                b.line(&format!("{} had {} missed payment(s)", group, summary.missed_payments.len()));
                for missed in &summary.missed_payments {
                    b.line(&format!("-> Order #{}: {}", missed.order_number, format_money(missed.total)));
                }
            }
            group_lines.push(format!("{}: {}", group, order_summary_line(&summary)));
        }
        for line in &group_lines {
            b.line(line);
        }

        b.line_lr("Sales:", &format_money(daily.sales));
        b.line_lr("Sales Tax:", &format_money(daily.sales_tax));
        b.line_lr("Tips:", &format_money(daily.tips));

        if !daily.third_party_orders.is_empty() {
            b.line("Deliveries:");
            for (merchant, orders) in daily.third_party_orders.iter() {
                let summary = summarize(orders, withheld);
                b.line(&format!("-> {}: {}", merchant, format_money(summary.total_sales)));
            }
        }
        b.feed(2);
    }

    fn render_summary(&self, b: &mut ReportBuilder, summary: &WeeklySummary, costs: &LaborCosts) {
        b.heading("Summary");
        b.line_lr("Wages:", &format_money(costs.wages));
        b.line_lr("Payroll Taxes:", &format_money(costs.payroll_taxes));
        b.line_lr("Total Employee Costs:", &format_money(costs.total()));
        b.line_lr("Net Sales:", &format_money(summary.sales));
        let percentage = costs
            .percentage_of_sales()
            .map(format_percentage)
            .unwrap_or_else(|| "n/a".to_string());
        b.line_lr("Employee Costs % of Sales:", &percentage);
        b.line_lr("Tips:", &format_money(summary.tips.total));
        b.line_lr("Sales Tax:", &format_money(summary.sales_tax));
        b.feed(2);
    }

    fn render_tips(&self, b: &mut ReportBuilder, summary: &WeeklySummary, directory: &EmployeeDirectory) {
        b.heading("Tips Breakdown");
        for (employee_id, amount) in &summary.tips.details {
            b.line_lr(&format!("{}:", directory.name_of(*employee_id)), &format_money(*amount));
        }
        b.feed(2);
    }

    fn render_wages(&self, b: &mut ReportBuilder, costs: &LaborCosts) {
        b.heading("Wages Breakdown");
        for line in &costs.hourly {
            b.line(&format!(
                "{}: {:.2} hours @ {}/hr = {} + {} tips = {} total compensation",
                line.name,
                line.hours.round_dp(2),
                format_money(line.rate),
                format_money(line.wage),
                format_money(line.tips),
                format_money(line.total_compensation())
            ));
        }
        for pay in &costs.cash {
            b.line(&format!(
                "{}: {} pay + {} taxes = {} total compensation",
                pay.name,
                format_money(pay.net_pay),
                format_money(pay.taxes),
                format_money(pay.total_compensation())
            ));
        }
        b.feed(2);
    }

    fn render_cash(&self, b: &mut ReportBuilder, cash: &CashWithdrawals) {
        b.heading("Cash Held");
        if cash.is_empty() {
            b.line("No cash withdrawals");
        }
        for (recipient, amount) in cash.sum_by_recipient() {
            b.line_lr(&format!("{}:", recipient), &format_money(amount));
        }
        b.feed(2);
    }

    fn render_statement(&self, b: &mut ReportBuilder, s: &CommissionStatement) {
        b.heading(&format!(
            "PAY for {} {} - {}",
            s.name,
            s.from.format("%m/%d"),
            s.to.format("%m/%d")
        ));
        b.line(&format!(
            "Sales: {} * {} = {}",
            format_money(s.net_sales),
            format_percentage(s.percentage),
            format_money(s.commission())
        ));
        b.line(&format!("Tips: {}", format_money(s.tips)));
        b.newline();
        b.line(&format!("Pretax Pay: {}", format_money(s.pretax_pay())));
        b.line(&format!("Taxes: {}", format_money(-s.taxes)));
        b.line(&format!("Net Pay: {}", format_money(s.net_pay())));
        b.newline();
        b.line("Cash:");
        if s.cash_held.is_empty() {
            b.line("No cash taken");
        }
        for amount in &s.cash_held {
            b.line(&format!("  {}", format_money(-*amount)));
        }
        b.newline();
        b.line(&format!("Deposit: {}", format_money(s.deposit())));
        b.feed(2);
    }

    fn render_deliveries(
        &self,
        b: &mut ReportBuilder,
        title: &str,
        book: &BTreeMap<NaiveDate, ThirdPartyMerchantOrders>,
    ) {
        b.heading(title);
        if book.is_empty() {
            b.line("None");
        }
        for (date, orders) in book {
            b.line(&date.format("%m/%d/%Y").to_string());
            for (merchant, orders) in orders.iter() {
                b.line(&format!("  {}", merchant));
                for order in orders {
                    b.line(&format!("  -> Order #{}: {}", order.order_number, format_money(order.total)));
                }
            }
        }
        b.newline();
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(48)
    }
}

/// One line per order group: totals, average order time, voids and missed
/// payments
pub fn order_summary_line(summary: &OrderSummary) -> String {
    let (minutes, seconds) = summary.avg_minutes_seconds();
    let missed = if summary.missed_payments.is_empty() {
        "none".to_string()
    } else {
        summary
            .missed_payments
            .iter()
            .map(|o| format!("order #{} - {}", o.order_number, format_money(o.total)))
            .collect::<Vec<_>>()
            .join(" | ")
    };
    format!(
        "sales: {}, tax: {}, tips: {}, average order time: {} mins, {} seconds, voids: {}, missed payments: {}",
        format_money(summary.total_sales),
        format_money(summary.total_taxes),
        format_money(summary.total_tips),
        minutes,
        seconds,
        summary.voids,
        missed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::build_daily_summary;
    use shared::models::{
        CashEmployeePay, CashWithdrawal, Employee, EmployeeId, OrderDetail, ThirdPartyMerchant,
        TipDetails,
    };
    use std::time::Duration;

    fn order(number: i64, server: &str, dining: &str, amount: i64, tax: i64, tip: i64, paid: bool) -> OrderDetail {
        OrderDetail {
            order_id: number.to_string(),
            order_number: number,
            server: server.to_string(),
            dining_options: dining.to_string(),
            amount: Decimal::from(amount),
            tax: Decimal::from(tax),
            tip: Decimal::from(tip),
            total: Decimal::from(amount + tax + tip),
            voided: false,
            paid_at: paid.then(|| date().and_hms_opt(12, 0, 0).unwrap()),
            duration: Duration::from_secs(45 * 60 + 30),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    #[test]
    fn test_order_summary_line() {
        let orders = vec![
            order(1, "Alice", "Dine In", 100, 8, 15, true),
            order(2, "Alice", "Dine In", 20, 2, 0, false),
        ];
        let line = order_summary_line(&summarize(&orders, Decimal::ZERO));
        assert_eq!(
            line,
            "sales: $100.00, tax: $8.00, tips: $15.00, average order time: 45 mins, 30 seconds, voids: 0, missed payments: order #2 - $22.00"
        );
    }

    #[test]
    fn test_render_report_sections() {
        let dailies = BTreeMap::from([(
            date(),
            build_daily_summary(
                date(),
                vec![
                    order(1, "Alice", "Dine In", 100, 8, 15, true),
                    order(2, "Alice", "Uber Eats", 50, 4, 5, true),
                    order(3, "Alice", "Dine In", 10, 1, 0, false),
                ],
                Decimal::new(3, 2),
            ),
        )]);

        let mut ledger = DeliveryLedger::default();
        ledger.unpaid.entry(date()).or_default().add(
            ThirdPartyMerchant::UberEats,
            order(2, "Alice", "Uber Eats", 50, 4, 5, true),
        );

        let mut tips = TipDetails::default();
        tips.credit(EmployeeId(1), Decimal::new(1940, 2));
        tips.total = Decimal::new(1940, 2);
        let summary = WeeklySummary {
            from: date(),
            to: date(),
            sales: Decimal::from(100),
            sales_tax: Decimal::from(8),
            tips,
            hours: Vec::new(),
            cash_employees_pay: Vec::new(),
        };
        let costs = LaborCosts {
            hourly: Vec::new(),
            cash: vec![CashEmployeePay {
                employee_id: EmployeeId(7),
                name: "Tanya Doe".to_string(),
                net_pay: Decimal::from(20),
                taxes: Decimal::from(5),
            }],
            wages: Decimal::from(25),
            payroll_taxes: Decimal::from(5),
            net_sales: Decimal::from(100),
        };
        let cash = CashWithdrawals(vec![CashWithdrawal {
            timestamp: date().and_hms_opt(9, 0, 0).unwrap(),
            amount: Decimal::from(40),
            recipient: "Tanya".to_string(),
            employee_id: Some(EmployeeId(7)),
        }]);
        let statement = CommissionStatement {
            employee_id: EmployeeId(7),
            name: "Tanya Doe".to_string(),
            from: date(),
            to: date(),
            net_sales: Decimal::from(100),
            tips: Decimal::ZERO,
            percentage: Decimal::new(25, 2),
            cash_held: vec![Decimal::from(40)],
            taxes: Decimal::from(5),
        };
        let directory = EmployeeDirectory::new(vec![Employee {
            id: EmployeeId(1),
            employee_number: None,
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            email: String::new(),
            is_active: true,
            rate: Some(Decimal::from(15)),
            commission: None,
        }]);

        let report = ReportRenderer::default().render(&ReportData {
            dailies: &dailies,
            ledger: &ledger,
            summary: &summary,
            costs: &costs,
            cash: &cash,
            statements: &[statement],
            directory: &directory,
            tips_withheld_percentage: Decimal::new(3, 2),
        });

        assert!(report.contains("Wednesday: 2024/06/12"));
        assert!(report.contains("Alice had 1 missed payment(s)"));
        assert!(report.contains("-> Order #3: $11.00"));
        assert!(report.contains("Uber Eats: sales: $50.00"));
        assert!(report.contains("-> Uber Eats: $50.00"));
        assert!(report.contains("Employee Costs % of Sales:"));
        assert!(report.contains("30%"));
        assert!(report.contains("Alice Smith:"));
        assert!(report.contains("Tanya Doe: $20.00 pay + $5.00 taxes = $25.00 total compensation"));
        assert!(report.contains("PAY for Tanya Doe 06/12 - 06/12"));
        assert!(report.contains("Sales: $100.00 * 25% = $25.00"));
        assert!(report.contains("Deposit: -$20.00"));
        assert!(report.contains("Unpaid Delivery Orders"));
        assert!(report.contains("  -> Order #2: $59.00"));

        let paid = report.split("Paid Delivery Orders").nth(1).unwrap();
        assert!(paid.trim_start_matches(['-', '\n']).starts_with("None"));
    }
}

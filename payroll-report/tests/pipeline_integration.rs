// payroll-report/tests/pipeline_integration.rs
// Full weekly runs against in-memory sources (no network)

use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeDelta};
use payroll_report::core::{CashSheetConfig, CommissionEmployeePolicy, Policy};
use payroll_report::payroll::read_payroll_csv;
use payroll_report::sources::{OrderExportSource, SheetRowsSource, TimesheetService, export_path};
use payroll_report::{Answer, RunSettings, ScriptedOperator, Sources, run_report, write_outputs};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorKind};
use shared::models::{CommissionSalesStructure, CommissionTier, PayId};
use timesheet_client::{ShiftRecord, UserRecord};

const HEADER: &str = "Location,Order Id,Order #,Checks,Opened,Tab Names,Server,Service,Dining Options,Discount Amount,Amount,Tax,Tip,Total,Voided,Paid,Closed,Duration (Opened to Paid),Order Source";
const EXPORT_ID: &str = "113866";

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn dates() -> Vec<NaiveDate> {
    (12..=16)
        .map(|d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap())
        .collect()
}

struct StaticTimesheet {
    users: Vec<UserRecord>,
    shifts: Vec<ShiftRecord>,
}

#[async_trait]
impl TimesheetService for StaticTimesheet {
    async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        Ok(self.users.clone())
    }

    async fn timesheet_entries(&self, _from: NaiveDate, _to: NaiveDate) -> AppResult<Vec<ShiftRecord>> {
        Ok(self.shifts.clone())
    }
}

#[derive(Default)]
struct MemoryExports {
    files: HashMap<String, Vec<u8>>,
}

#[async_trait]
impl OrderExportSource for MemoryExports {
    async fn download(&self, remote_path: &str) -> AppResult<Vec<u8>> {
        self.files.get(remote_path).cloned().ok_or_else(|| {
            AppError::with_message(ErrorKind::OrderExportNotFound, format!("missing {}", remote_path))
        })
    }
}

struct MemorySheet {
    rows: Vec<Vec<String>>,
}

#[async_trait]
impl SheetRowsSource for MemorySheet {
    async fn fetch_rows(&self, _id: &str, _name: &str, _range: &str) -> AppResult<Vec<Vec<String>>> {
        Ok(self.rows.clone())
    }
}

fn user(id: i64, first: &str, email: &str, number: &str, rate: i64) -> UserRecord {
    UserRecord {
        id,
        first_name: first.to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        employee_number: Some(number.to_string()),
        active: true,
        rate: Some(Decimal::from(rate)),
    }
}

fn shift(user_id: i64, date: NaiveDate, hours: i64, approved: bool) -> ShiftRecord {
    let clock_in =
        DateTime::parse_from_rfc3339(&format!("{}T10:00:00-04:00", date.format("%Y-%m-%d"))).unwrap();
    ShiftRecord {
        user_id,
        clock_in,
        clock_out: clock_in + TimeDelta::hours(hours),
        approved,
        paid_minutes: hours * 60,
    }
}

fn timesheet() -> StaticTimesheet {
    let mut shifts = Vec::new();
    for date in dates() {
        shifts.push(shift(1, date, 6, true));
        // commission employee, left unapproved
        shifts.push(shift(7, date, 6, false));
    }
    StaticTimesheet {
        users: vec![
            user(1, "Alice", "alice@example.com", "101", 15),
            user(7, "Tanya", "tanya@example.com", "107", 0),
        ],
        shifts,
    }
}

fn export_csv(date: NaiveDate) -> String {
    let day = date.format("%-m/%-d/%y");
    format!(
        "{HEADER}\n\
         Main,{d}1,1,1,{day} 11:00 AM,,Alice,Lunch,Dine In,0.00,100.00,8.00,15.00,123.00,false,{day} 11:45 AM,{day} 11:50 AM,0:45:00,In store\n\
         Main,{d}2,2,1,{day} 12:00 PM,,Online,Lunch,UBER EATS - Delivery,0.00,50.00,4.00,5.00,59.00,false,{day} 12:20 PM,{day} 12:20 PM,0:20:00,Uber Eats\n",
        d = date.format("%d"),
    )
}

fn exports() -> MemoryExports {
    MemoryExports {
        files: dates()
            .into_iter()
            .map(|date| (export_path(EXPORT_ID, date), export_csv(date).into_bytes()))
            .collect(),
    }
}

fn policy() -> Policy {
    Policy {
        commission_employees: vec![CommissionEmployeePolicy {
            email: "tanya@example.com".to_string(),
            tiers: CommissionSalesStructure::new(vec![
                CommissionTier::LessThan { threshold: Decimal::from(2800), percentage: dec("0.15") },
                CommissionTier::LessThan { threshold: Decimal::from(3300), percentage: dec("0.18") },
                CommissionTier::GreaterThanOrEqual { threshold: Decimal::from(3300), percentage: dec("0.20") },
            ]),
        }],
        tip_exclusions: Vec::new(),
    }
}

fn settings() -> RunSettings {
    RunSettings {
        export_id: EXPORT_ID.to_string(),
        tips_withheld_percentage: dec("0.03"),
        payroll_tax_rate: dec("0.0765"),
        cash_sheet: None,
        report_width: 48,
    }
}

fn operator() -> ScriptedOperator {
    ScriptedOperator::new(vec![
        // first Uber Eats order never paid out
        Answer::Confirm(false),
        Answer::Confirm(true),
        Answer::Confirm(true),
        Answer::Confirm(true),
        Answer::Confirm(true),
        // cash held by Tanya
        Answer::Amount(Decimal::from(100)),
        Answer::Amount(Decimal::ZERO),
        // Tanya's taxes
        Answer::Amount(Decimal::from(10)),
    ])
}

fn count_lines(report: &str, label: &str, value: &str) -> usize {
    report
        .lines()
        .filter(|l| l.starts_with(label) && l.ends_with(value))
        .count()
}

#[tokio::test]
async fn test_full_week() {
    let timesheet = timesheet();
    let exports = exports();
    let sources = Sources {
        timesheet: &timesheet,
        exports: &exports,
        sheets: None,
    };
    let mut operator = operator();

    let output = run_report(&dates(), &policy(), &settings(), &sources, &mut operator)
        .await
        .unwrap();
    let report = &output.report;

    assert_eq!(operator.remaining(), 0);
    assert_eq!(output.from, NaiveDate::from_ymd_opt(2024, 6, 12).unwrap());
    assert_eq!(output.to, NaiveDate::from_ymd_opt(2024, 6, 16).unwrap());

    // (15 + 5) * 0.97 every day; Uber Eats tax left out of sales tax
    assert_eq!(count_lines(report, "Tips:", "$19.40"), 5);
    assert_eq!(count_lines(report, "Sales Tax:", "$8.00"), 5);
    assert_eq!(count_lines(report, "Sales:", "$150.00"), 5);
    assert!(report.contains("Wednesday: 2024/06/12"));
    assert!(report.contains("Sunday: 2024/06/16"));
    assert!(report.contains("-> Uber Eats: $50.00"));

    // 750 - (50 + 4 + 5 * 0.97)
    assert_eq!(count_lines(report, "Net Sales:", "$691.15"), 1);
    assert_eq!(count_lines(report, "Sales Tax:", "$40.00"), 1);
    assert_eq!(count_lines(report, "Tips:", "$97.00"), 1);

    // Alice 30h @ 15 = 450, Tanya 142.17 net + 10 taxes
    assert_eq!(count_lines(report, "Wages:", "$602.17"), 1);
    assert_eq!(count_lines(report, "Payroll Taxes:", "$44.43"), 1);
    assert_eq!(count_lines(report, "Total Employee Costs:", "$646.60"), 1);
    assert_eq!(count_lines(report, "Employee Costs % of Sales:", "94%"), 1);

    // equal 6h shifts split the pool evenly
    assert_eq!(count_lines(report, "Alice Doe:", "$48.50"), 1);
    assert_eq!(count_lines(report, "Tanya Doe:", "$48.50"), 1);
    assert!(report.contains(
        "Alice Doe: 30.00 hours @ $15.00/hr = $450.00 + $48.50 tips = $498.50 total compensation"
    ));

    assert!(report.contains("PAY for Tanya Doe 06/12 - 06/16"));
    assert!(report.contains("Sales: $691.15 * 15% = $103.67"));
    assert!(report.contains("Pretax Pay: $152.17"));
    assert!(report.contains("Net Pay: $142.17"));
    assert!(report.contains("Deposit: $42.17"));

    let unpaid = report.split("Unpaid Delivery Orders").nth(1).unwrap();
    assert!(unpaid.contains("06/12/2024"));
    assert!(unpaid.contains("-> Order #2: $59.00"));
    assert!(!unpaid.contains("06/13/2024"));

    // Tanya is paid outside payroll
    assert_eq!(output.payroll.len(), 2);
    assert_eq!(output.payroll[0].pay_id, PayId::Regular);
    assert_eq!(output.payroll[0].employee_number, "101");
    assert_eq!(output.payroll[0].hours, Decimal::from(30));
    assert_eq!(output.payroll[1].pay_id, PayId::ControlledTips);
    assert_eq!(output.payroll[1].cash_amount, "48.50");
}

#[tokio::test]
async fn test_outputs_round_trip() {
    let mut timesheet = timesheet();
    // 100 paid minutes on Wednesday, a non-terminating hour fraction
    timesheet.shifts[0].paid_minutes = 100;
    let hours = Decimal::from(4 * 360 + 100) / Decimal::from(60);
    let exports = exports();
    let sources = Sources {
        timesheet: &timesheet,
        exports: &exports,
        sheets: None,
    };
    let output = run_report(&dates(), &policy(), &settings(), &sources, &mut operator())
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let (report_path, payroll_path) = write_outputs(dir.path(), &output).await.unwrap();

    assert_eq!(std::fs::read_to_string(report_path).unwrap(), output.report);

    let read = read_payroll_csv(std::fs::File::open(payroll_path).unwrap()).unwrap();
    assert_eq!(read.len(), output.payroll.len());
    for (written, read) in output.payroll.iter().zip(&read) {
        assert_eq!(written.employee_number, read.employee_number);
        assert_eq!(written.rate, read.rate);
        assert_eq!(written.cash_amount, read.cash_amount);
    }

    assert_eq!(read[0].employee_number, "101");
    assert_eq!(read[0].hours, hours);
    // wage in the report and in payroll agree: 25.666.. h @ $15
    let wage = shared::util::round_money(read[0].hours * read[0].rate);
    assert_eq!(wage, dec("385.00"));
    assert!(output.report.contains("= $385.00 +"));
}

#[tokio::test]
async fn test_cash_from_sheet() {
    let timesheet = timesheet();
    let exports = exports();
    let sheet = MemorySheet {
        rows: vec![
            vec!["6/11/2024 20:00:00".into(), "500".into(), "Tanya".into()],
            vec!["6/13/2024 20:00:00".into(), "60".into(), "Tanya".into()],
            vec!["6/14/2024".into(), "40".into(), "Tanya Doe".into()],
            vec!["6/15/2024 09:00:00".into(), "25".into(), "Petty Cash".into()],
        ],
    };
    let sources = Sources {
        timesheet: &timesheet,
        exports: &exports,
        sheets: Some(&sheet),
    };
    let mut settings = settings();
    settings.cash_sheet = Some(CashSheetConfig {
        sheet_id: "sheet".to_string(),
        sheet_name: "Withdrawals".to_string(),
        range: "2:1010".to_string(),
        api_url: "http://127.0.0.1:9".to_string(),
        token: String::new(),
    });
    let mut operator = ScriptedOperator::new(vec![
        Answer::Confirm(true),
        Answer::Confirm(true),
        Answer::Confirm(true),
        Answer::Confirm(true),
        Answer::Confirm(true),
        Answer::Amount(Decimal::ZERO),
    ]);

    let output = run_report(&dates(), &policy(), &settings, &sources, &mut operator)
        .await
        .unwrap();
    let report = &output.report;

    assert_eq!(operator.remaining(), 0);
    let cash = report.split("Cash Held").nth(1).unwrap();
    assert!(cash.contains("Petty Cash:"));
    assert_eq!(count_lines(cash, "Tanya:", "$60.00"), 1);
    assert_eq!(count_lines(cash, "Tanya Doe:", "$40.00"), 1);
    assert!(report.contains("  -$60.00"));
    assert!(report.contains("  -$40.00"));
    assert!(!report.contains("$500.00"));
}

#[tokio::test]
async fn test_unknown_header_aborts_without_output() {
    let timesheet = timesheet();
    let mut exports = exports();
    exports.files.insert(
        export_path(EXPORT_ID, dates()[2]),
        format!("{HEADER},Gratuity\n").into_bytes(),
    );
    let sources = Sources {
        timesheet: &timesheet,
        exports: &exports,
        sheets: None,
    };

    let err = run_report(&dates(), &policy(), &settings(), &sources, &mut operator())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownHeader);
    assert!(err.message.contains("2024-06-14"));
}

#[tokio::test]
async fn test_missing_export_aborts() {
    let timesheet = timesheet();
    let mut exports = exports();
    exports.files.remove(&export_path(EXPORT_ID, dates()[4]));
    let sources = Sources {
        timesheet: &timesheet,
        exports: &exports,
        sheets: None,
    };

    let err = run_report(&dates(), &policy(), &settings(), &sources, &mut operator())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::OrderExportNotFound);
}

#[tokio::test]
async fn test_unapproved_hourly_shift_aborts() {
    let mut timesheet = timesheet();
    timesheet.shifts[0].approved = false;
    let exports = exports();
    let sources = Sources {
        timesheet: &timesheet,
        exports: &exports,
        sheets: None,
    };

    let err = run_report(&dates(), &policy(), &settings(), &sources, &mut operator())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnapprovedShift);
}

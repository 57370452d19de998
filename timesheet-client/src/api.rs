//! Scheduling service API

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::{TimesheetItemDto, UsersConciseDto};
use crate::{ClientConfig, ClientError, ClientResult, HttpClient};

/// User as listed by the scheduling service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Payroll provider employee number
    pub employee_number: Option<String>,
    pub active: bool,
    /// Base hourly rate, `None` when unset in the service
    pub rate: Option<Decimal>,
}

/// One clocked shift from the timesheet report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub user_id: i64,
    pub clock_in: DateTime<FixedOffset>,
    pub clock_out: DateTime<FixedOffset>,
    pub approved: bool,
    pub paid_minutes: i64,
}

/// Scheduling service client
#[derive(Debug, Clone)]
pub struct TimesheetClient {
    http: HttpClient,
}

impl TimesheetClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: config.build_http_client()?,
        })
    }

    pub fn is_logged_in(&self) -> bool {
        self.http.token().is_some()
    }

    /// Log in and keep the returned token for later calls
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<String> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        if email.is_empty() {
            return Err(ClientError::Validation("login email is empty".to_string()));
        }

        let token = self
            .http
            .post_for_token("account/login", &LoginRequest { email, password })
            .await?;
        self.http.set_token(token.clone());
        tracing::info!(email = %email, "Logged in to scheduling service");
        Ok(token)
    }

    /// Log in unless a fixed token was configured
    pub async fn ensure_logged_in(&mut self, email: &str, password: &str) -> ClientResult<()> {
        if self.is_logged_in() {
            tracing::debug!("Using configured scheduling service token");
            return Ok(());
        }
        self.login(email, password).await.map(|_| ())
    }

    /// All users visible to the account
    pub async fn list_users(&self) -> ClientResult<Vec<UserRecord>> {
        self.require_token()?;
        let body: UsersConciseDto = self.http.get("users/concise").await?;
        tracing::debug!(count = body.users.len(), "Fetched users");
        Ok(body.users.into_iter().map(UserRecord::from).collect())
    }

    /// Timesheet entries clocked within `[from, to]`
    ///
    /// Items without a projection are skipped.
    pub async fn timesheet_entries(&self, from: NaiveDate, to: NaiveDate) -> ClientResult<Vec<ShiftRecord>> {
        self.require_token()?;
        let items: Vec<TimesheetItemDto> = self.http.get(&timesheets_path(from, to)).await?;

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            let user_id = item.user.id;
            match item.into_record()? {
                Some(record) => records.push(record),
                None => tracing::debug!(user_id, "Skipping timesheet item without projections"),
            }
        }
        tracing::debug!(count = records.len(), %from, %to, "Fetched timesheet entries");
        Ok(records)
    }

    fn require_token(&self) -> ClientResult<()> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(ClientError::Unauthorized)
        }
    }
}

/// Path of the timesheet report covering whole days `from..=to` (UTC)
pub fn timesheets_path(from: NaiveDate, to: NaiveDate) -> String {
    format!(
        "reports/timesheets?dates={}T00:00:00Z/{}T23:59:59Z",
        from.format("%Y-%m-%d"),
        to.format("%Y-%m-%d")
    )
}

//! Scheduling service source

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;
use timesheet_client::{ShiftRecord, TimesheetClient, UserRecord};

/// Users and shifts from the scheduling service
#[async_trait]
pub trait TimesheetService: Send + Sync {
    async fn list_users(&self) -> AppResult<Vec<UserRecord>>;

    /// Shift records clocked in between `from` and `to`, both inclusive
    async fn timesheet_entries(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<ShiftRecord>>;
}

#[async_trait]
impl TimesheetService for TimesheetClient {
    async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        Ok(TimesheetClient::list_users(self).await?)
    }

    async fn timesheet_entries(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<ShiftRecord>> {
        Ok(TimesheetClient::timesheet_entries(self, from, to).await?)
    }
}

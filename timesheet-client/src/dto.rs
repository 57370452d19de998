//! Wire types for the scheduling service
//!
//! Field names follow the service's camelCase JSON. Conversion into
//! [`UserRecord`] / [`ShiftRecord`] lives here so the API layer stays thin.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::api::{ShiftRecord, UserRecord};
use crate::{ClientError, ClientResult};

/// Deserialize bool that treats null as false
fn bool_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(false))
}

/// Employee number may arrive as a string, a number or null
fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}

/// `GET /users/concise` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersConciseDto {
    #[serde(default)]
    pub users: Vec<UserDto>,
}

/// One user from the concise listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    /// First name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "bool_false")]
    pub active: bool,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub employee_id: Option<String>,
    /// Base hourly wage
    #[serde(default)]
    pub wage: Option<Decimal>,
}

impl From<UserDto> for UserRecord {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.name,
            last_name: dto.lastname,
            email: dto.email,
            employee_number: dto.employee_id,
            active: dto.active,
            rate: dto.wage,
        }
    }
}

/// Reference to another entity by id
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ItemIdDto {
    pub id: i64,
}

/// One item of `GET /reports/timesheets`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetItemDto {
    pub user: ItemIdDto,
    #[serde(default)]
    pub position: Option<ItemIdDto>,
    #[serde(default)]
    pub timesheet_projections: Vec<TimesheetProjectionDto>,
}

/// Clock-in/clock-out projection of a timesheet item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetProjectionDto {
    pub clock_in: DateTime<FixedOffset>,
    pub clock_out: DateTime<FixedOffset>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub break_minutes: i64,
    #[serde(default)]
    pub paid_minutes: i64,
}

impl TimesheetItemDto {
    /// Convert into a shift record.
    ///
    /// Items without projections yield `None`; more than one projection is
    /// an error.
    pub fn into_record(self) -> ClientResult<Option<ShiftRecord>> {
        let user_id = self.user.id;
        let mut projections = self.timesheet_projections;

        match projections.len() {
            0 => Ok(None),
            1 => {
                let p = projections.remove(0);
                Ok(Some(ShiftRecord {
                    user_id,
                    clock_in: p.clock_in,
                    clock_out: p.clock_out,
                    approved: p.status.as_deref() == Some("approved"),
                    paid_minutes: p.paid_minutes,
                }))
            }
            n => Err(ClientError::InvalidTimesheet(format!(
                "expected one timesheet projection for user id={}, found {}",
                user_id, n
            ))),
        }
    }
}

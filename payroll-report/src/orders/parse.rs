//! `OrderDetails.csv` parsing
//!
//! The header row must only contain known columns; anything else aborts the
//! run so a changed export format is never silently misread.

use std::time::Duration;

use chrono::NaiveDateTime;
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorKind};
use shared::models::OrderDetail;
use shared::util::parse_money;

/// Timestamp format of the export (`6/12/24 1:05 PM`)
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y %I:%M %p";

/// Every column the export may carry
pub const KNOWN_HEADERS: [&str; 19] = [
    "Location",
    "Order Id",
    "Order #",
    "Checks",
    "Opened",
    "Tab Names",
    "Server",
    "Service",
    "Dining Options",
    "Discount Amount",
    "Amount",
    "Tax",
    "Tip",
    "Total",
    "Voided",
    "Paid",
    "Closed",
    "Duration (Opened to Paid)",
    "Order Source",
];

/// Raw export row; only the columns the report uses are kept
#[derive(Debug, Deserialize)]
struct OrderDetailRow {
    #[serde(rename = "Order Id")]
    order_id: String,
    #[serde(rename = "Order #")]
    order_number: String,
    #[serde(rename = "Server", default)]
    server: String,
    #[serde(rename = "Dining Options", default)]
    dining_options: String,
    #[serde(rename = "Amount", default)]
    amount: String,
    #[serde(rename = "Tax", default)]
    tax: String,
    #[serde(rename = "Tip", default)]
    tip: String,
    #[serde(rename = "Total", default)]
    total: String,
    #[serde(rename = "Voided", default)]
    voided: String,
    #[serde(rename = "Paid", default)]
    paid: String,
    #[serde(rename = "Duration (Opened to Paid)", default)]
    duration: String,
}

impl OrderDetailRow {
    fn into_order(self) -> AppResult<OrderDetail> {
        let order_number = self.order_number.trim().parse::<i64>().map_err(|_| {
            AppError::invalid_format(format!("invalid order number {:?}", self.order_number))
        })?;

        Ok(OrderDetail {
            order_id: self.order_id.trim().to_string(),
            order_number,
            server: self.server.trim().to_string(),
            dining_options: self.dining_options.trim().to_string(),
            amount: money(&self.amount, "Amount")?,
            tax: money(&self.tax, "Tax")?,
            tip: money(&self.tip, "Tip")?,
            total: money(&self.total, "Total")?,
            voided: parse_bool(&self.voided)?,
            paid_at: parse_timestamp(&self.paid)?,
            duration: parse_duration(&self.duration)?,
        })
    }
}

fn money(raw: &str, column: &str) -> AppResult<rust_decimal::Decimal> {
    parse_money(raw)
        .map_err(|_| AppError::invalid_format(format!("invalid {} value {:?}", column, raw)))
}

/// `true` / `false`, empty means false
pub fn parse_bool(raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" | "" => Ok(false),
        other => Err(AppError::invalid_format(format!("invalid boolean {:?}", other))),
    }
}

/// Export timestamp, empty means absent
pub fn parse_timestamp(raw: &str) -> AppResult<Option<NaiveDateTime>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(Some)
        .map_err(|_| AppError::invalid_format(format!("invalid timestamp {:?}", raw)))
}

/// `H:MM:SS` duration, empty means zero
pub fn parse_duration(raw: &str) -> AppResult<Duration> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Duration::ZERO);
    }

    let invalid = || AppError::invalid_format(format!("invalid duration {:?}", raw));
    let parts: Vec<&str> = raw.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(invalid());
    };

    let hours: u64 = hours.parse().map_err(|_| invalid())?;
    let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
    let seconds: u64 = seconds.parse().map_err(|_| invalid())?;
    if minutes >= 60 || seconds >= 60 {
        return Err(invalid());
    }

    let total = hours
        .checked_mul(3600)
        .and_then(|secs| secs.checked_add(minutes * 60 + seconds))
        .ok_or_else(invalid)?;
    Ok(Duration::from_secs(total))
}

/// Parse a whole `OrderDetails.csv` export
pub fn parse_order_details(bytes: &[u8]) -> AppResult<Vec<OrderDetail>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| parse_failed(format!("failed to read header row: {}", e)))?
        .clone();

    for header in headers.iter() {
        if !KNOWN_HEADERS.contains(&header) {
            return Err(AppError::with_message(
                ErrorKind::UnknownHeader,
                format!("unknown header {}", header),
            )
            .with_detail("header", header));
        }
    }

    let mut orders = Vec::new();
    for (index, row) in reader.deserialize::<OrderDetailRow>().enumerate() {
        // header is line 1
        let line = index + 2;
        let row = row.map_err(|e| parse_failed(format!("line {}: {}", line, e)))?;
        let order = row.into_order().map_err(|e| {
            AppError::with_message(ErrorKind::OrderParseFailed, format!("line {}: {}", line, e.message))
                .with_detail("line", line)
        })?;
        orders.push(order);
    }

    tracing::debug!(count = orders.len(), "Parsed order export");
    Ok(orders)
}

fn parse_failed(message: String) -> AppError {
    AppError::with_message(ErrorKind::OrderParseFailed, message)
}

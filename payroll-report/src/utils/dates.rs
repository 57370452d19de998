//! Reporting dates

use chrono::{Datelike, Days, NaiveDate, Weekday};
use shared::error::{AppError, AppResult};

/// Number of dates in a reporting window (Wednesday through Sunday)
pub const WINDOW_DAYS: u64 = 5;

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::invalid_format(format!("Invalid date format: {}", date)))
}

/// Most recent Sunday on or before `today`
pub fn last_sunday(today: NaiveDate) -> NaiveDate {
    let days_since_sunday = today.weekday().num_days_from_sunday();
    today - Days::new(u64::from(days_since_sunday))
}

/// Wednesday through Sunday of the week ending on the most recent Sunday
pub fn reporting_window(today: NaiveDate) -> Vec<NaiveDate> {
    let sunday = last_sunday(today);
    let monday = sunday - Days::new(6);
    (2..2 + WINDOW_DAYS)
        .map(|offset| monday + Days::new(offset))
        .collect()
}

/// Export folder name for a date (`yyyymmdd`)
pub fn export_folder(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// `Wednesday: 2024/06/12`
pub fn day_heading(date: NaiveDate) -> String {
    format!("{}: {}", weekday_name(date.weekday()), date.format("%Y/%m/%d"))
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

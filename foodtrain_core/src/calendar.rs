//! Pure date arithmetic over ISO `YYYY-MM-DD` dates.
//!
//! All plan keys and history scans are anchored on calendar dates, never
//! wall-clock times, so this module is the only place date math happens.

use crate::{Error, Result};
use chrono::{Datelike, Duration, NaiveDate};

/// Parse a strict `YYYY-MM-DD` date string
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| Error::Config(format!("invalid date '{}': {}", s, e)))
}

/// Offset a date by a signed number of days
pub fn offset_days(date: NaiveDate, delta: i64) -> NaiveDate {
    date + Duration::days(delta)
}

/// Weekday number with 0 = Sunday .. 6 = Saturday
pub fn weekday_number(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

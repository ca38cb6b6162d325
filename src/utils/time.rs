//! Time utilities: parsing HH:MM, duration computations, etc.

use crate::errors::{AppError, AppResult};
use crate::models::format::parse_time_flexible;
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    parse_time_flexible(t)
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// Hours between clock-in and clock-out, rounded to two decimals.
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    let mins = minutes_between(start, end) as f64;
    (mins / 60.0 * 100.0).round() / 100.0
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

//! Time utilities: parsing HH:MM and local timestamps, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Combine a date and an `HH:MM` string into a local timestamp.
pub fn at(date: NaiveDate, t: &str) -> AppResult<NaiveDateTime> {
    let time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(date.and_time(time))
}

/// Parse `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM` or either with seconds.
pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];
    let s = s.trim();
    FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

use crate::errors::{AppError, AppResult};
use crate::models::DateRange;
use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a period expression into an inclusive date range.
///
/// Supported:
/// - `YYYY-MM-DD` → that day
/// - `YYYY-MM`    → the whole month
/// - `YYYY`       → the whole year
/// - `start:end`  → any two of the above, from the first day of `start`
///   to the last day of `end`
pub fn parse_period(p: &str) -> AppResult<DateRange> {
    if let Some((start, end)) = p.split_once(':') {
        let s = single_period(start.trim())?;
        let e = single_period(end.trim())?;
        return DateRange::new(s.start, e.end)
            .map_err(|_| AppError::InvalidDate(format!("{p}: start is after end")));
    }
    single_period(p.trim())
}

fn single_period(p: &str) -> AppResult<DateRange> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok(DateRange::single(d));
    }

    // YYYY-MM
    if p.len() == 7
        && let Some(first) = parse_date(&format!("{p}-01"))
    {
        return Ok(DateRange {
            start: first,
            end: last_day_of_month(first.year(), first.month())
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?,
        });
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(start), Some(end)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok(DateRange { start, end });
    }

    Err(AppError::InvalidDate(format!("Invalid period: {p}")))
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (y, m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).map(|d| d - Duration::days(1))
}

pub fn current_month() -> AppResult<DateRange> {
    let t = today();
    parse_period(&t.format("%Y-%m").to_string())
}

/// Today plus the following `days` days.
pub fn next_days(days: i64) -> DateRange {
    let start = today();
    DateRange {
        start,
        end: start + Duration::days(days),
    }
}

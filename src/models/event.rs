use super::geo::GeoPoint;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M";

/// A calendar entry as stored locally (⇔ `events` table).
///
/// Timestamps are local wall-clock times; the location is the free-text
/// address exactly as entered, resolved later through the location cache.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub location: Option<String>,
    pub calendar: String,
    pub source: String,
    pub created_at: String,
}

impl CalendarEvent {
    /// Build an event not yet persisted (`id = 0`, `source = "cli"`).
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        location: Option<String>,
        calendar: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            start,
            end,
            location,
            calendar: calendar.into(),
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn start_str(&self) -> String {
        self.start.format(DATETIME_FMT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(DATETIME_FMT).to_string()
    }

    /// Attach a resolved position (or none) for the suggestion engine.
    pub fn located(&self, point: Option<GeoPoint>) -> LocatedEvent {
        LocatedEvent {
            start: self.start,
            end: self.end,
            point,
        }
    }
}

/// An existing commitment with its position, the engine's input unit.
///
/// `point` is `None` when the location could not be geocoded; such events
/// still occupy time but contribute no travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatedEvent {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub point: Option<GeoPoint>,
}

impl LocatedEvent {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, point: Option<GeoPoint>) -> Self {
        Self { start, end, point }
    }

    /// End clamped so that a negative-duration event degrades to a point.
    pub fn effective_end(&self) -> NaiveDateTime {
        self.end.max(self.start)
    }
}

//! Event fetch from the local calendar store and the join with resolved
//! locations that turns stored events into engine input.

use crate::db::queries::load_events_between;
use crate::errors::AppResult;
use crate::models::{CalendarEvent, GeoPoint, LocatedEvent};
use chrono::NaiveDateTime;
use rusqlite::Connection;
use std::collections::{HashMap, HashSet};

/// Events overlapping `[start, end)` in the given calendars (all when empty).
pub fn fetch_events(
    conn: &Connection,
    calendars: &[String],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> AppResult<Vec<CalendarEvent>> {
    load_events_between(conn, start, end, calendars)
}

/// Distinct non-empty location strings of `events`.
pub fn location_set(events: &[CalendarEvent]) -> HashSet<String> {
    events
        .iter()
        .filter_map(|ev| ev.location.as_deref())
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Attach coordinates; events whose location is missing or unresolved keep
/// `point = None`.
pub fn locate_events(
    events: &[CalendarEvent],
    resolved: &HashMap<String, GeoPoint>,
) -> Vec<LocatedEvent> {
    events
        .iter()
        .map(|ev| {
            let point = ev
                .location
                .as_deref()
                .and_then(|l| resolved.get(l.trim()).copied());
            ev.located(point)
        })
        .collect()
}

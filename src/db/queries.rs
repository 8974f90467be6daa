use crate::errors::{AppError, AppResult};
use crate::models::event::DATETIME_FMT;
use crate::models::{CalendarEvent, GeoPoint};
use chrono::{Local, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, ToSql, params, params_from_iter};
use std::collections::HashMap;

const EVENT_COLUMNS: &str = "id, title, start_at, end_at, location, calendar, source, created_at";

fn parse_ts(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, DATETIME_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.to_string())),
        )
    })
}

pub fn map_row(row: &Row) -> Result<CalendarEvent> {
    let start_str: String = row.get("start_at")?;
    let end_str: String = row.get("end_at")?;

    Ok(CalendarEvent {
        id: row.get("id")?,
        title: row.get("title")?,
        start: parse_ts(&start_str)?,
        end: parse_ts(&end_str)?,
        location: row.get("location")?,
        calendar: row.get("calendar")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a new event and return its id.
pub fn insert_event(conn: &Connection, ev: &CalendarEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (title, start_at, end_at, location, calendar, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            ev.title,
            ev.start_str(),
            ev.end_str(),
            ev.location,
            ev.calendar,
            ev.source,
            ev.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<Option<CalendarEvent>> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1");
    let ev = conn.query_row(&sql, [id], map_row).optional()?;
    Ok(ev)
}

/// Delete one event; returns the number of rows removed (0 or 1).
pub fn delete_event(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    Ok(n)
}

/// Events overlapping `[start, end)`, ordered by start.
///
/// An empty `calendars` slice means every calendar.
pub fn load_events_between(
    conn: &Connection,
    start: NaiveDateTime,
    end: NaiveDateTime,
    calendars: &[String],
) -> AppResult<Vec<CalendarEvent>> {
    let start_str = start.format(DATETIME_FMT).to_string();
    let end_str = end.format(DATETIME_FMT).to_string();

    let mut sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE end_at >= ?1 AND start_at < ?2");

    let mut values: Vec<&dyn ToSql> = vec![&start_str, &end_str];
    if !calendars.is_empty() {
        let placeholders = (0..calendars.len())
            .map(|i| format!("?{}", i + 3))
            .collect::<Vec<_>>()
            .join(",");
        sql.push_str(&format!(" AND calendar IN ({placeholders})"));
        values.extend(calendars.iter().map(|c| c as &dyn ToSql));
    }
    sql.push_str(" ORDER BY start_at ASC, id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_events(conn: &Connection) -> AppResult<Vec<CalendarEvent>> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY start_at ASC, id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Location cache
// ---------------------------

/// Cached positions for the given address strings (exact match).
pub fn cached_locations(
    conn: &Connection,
    locations: &[String],
) -> AppResult<HashMap<String, GeoPoint>> {
    let mut found = HashMap::new();
    if locations.is_empty() {
        return Ok(found);
    }

    let placeholders = vec!["?"; locations.len()].join(",");
    let sql = format!(
        "SELECT location, lat, long FROM location_cache WHERE location IN ({})",
        placeholders
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(locations.iter()), |row| {
        Ok((
            row.get::<_, String>(0)?,
            GeoPoint {
                lat: row.get(1)?,
                long: row.get(2)?,
            },
        ))
    })?;

    for r in rows {
        let (location, point) = r?;
        found.insert(location, point);
    }
    Ok(found)
}

/// Store a freshly resolved position; an existing entry is kept as is.
pub fn cache_location(conn: &Connection, location: &str, point: GeoPoint) -> AppResult<bool> {
    let n = conn.execute(
        "INSERT INTO location_cache (location, lat, long, created_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT (location) DO NOTHING",
        params![location, point.lat, point.long, Local::now().to_rfc3339()],
    )?;
    Ok(n > 0)
}

/// Store or overwrite a position entered by the user.
pub fn set_location(conn: &Connection, location: &str, point: GeoPoint) -> AppResult<()> {
    conn.execute(
        "INSERT INTO location_cache (location, lat, long, created_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT (location) DO UPDATE SET lat = excluded.lat, long = excluded.long",
        params![location, point.lat, point.long, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn list_locations(conn: &Connection) -> AppResult<Vec<(String, GeoPoint)>> {
    let mut stmt =
        conn.prepare("SELECT location, lat, long FROM location_cache ORDER BY location ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            GeoPoint {
                lat: row.get(1)?,
                long: row.get(2)?,
            },
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

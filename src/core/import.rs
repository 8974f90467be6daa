//! CSV import of calendar events.
//!
//! Expected header: `title,start,end,location,calendar`; `location` and
//! `calendar` may be empty or missing.

use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::CalendarEvent;
use crate::utils::time::parse_datetime;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ImportRow {
    title: String,
    start: String,
    end: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    calendar: Option<String>,
}

pub struct ImportLogic;

impl ImportLogic {
    pub fn import_file(pool: &mut DbPool, path: &Path, default_calendar: &str) -> AppResult<usize> {
        let file = std::fs::File::open(path)?;
        let n = Self::import_reader(pool, file, default_calendar)?;

        ttlog_or_warn(
            &pool.conn,
            "import",
            &path.display().to_string(),
            &format!("Imported {} events", n),
        );
        Ok(n)
    }

    /// All rows are validated before anything is written; one bad row
    /// rejects the whole file.
    pub fn import_reader<R: Read>(
        pool: &mut DbPool,
        reader: R,
        default_calendar: &str,
    ) -> AppResult<usize> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut events = Vec::new();
        for (i, row) in rdr.deserialize::<ImportRow>().enumerate() {
            let row = row?;
            let line = i + 2; // header is line 1

            let start = parse_datetime(&row.start)
                .map_err(|_| AppError::InvalidDate(format!("line {line}: start '{}'", row.start)))?;
            let end = parse_datetime(&row.end)
                .map_err(|_| AppError::InvalidDate(format!("line {line}: end '{}'", row.end)))?;
            if end <= start {
                return Err(AppError::InvalidTime(format!(
                    "line {line}: end must be after start"
                )));
            }

            let calendar = non_empty(row.calendar).unwrap_or_else(|| default_calendar.to_string());
            let mut ev = CalendarEvent::new(row.title, start, end, non_empty(row.location), calendar);
            ev.source = "import".to_string();
            events.push(ev);
        }

        let tx = pool.conn.transaction()?;
        for ev in &events {
            insert_event(&tx, ev)?;
        }
        tx.commit()?;

        Ok(events.len())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

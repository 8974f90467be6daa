// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::{cached_locations, load_all_events, load_events_between};
use crate::errors::{AppError, AppResult};
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::EventExport;
use crate::export::{ExportFormat, notify_export_success};
use crate::core::calendar::location_set;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use crate::utils::path::expand_tilde;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export stored events with their cached coordinates.
    ///
    /// - `range`: `None` or `"all"` for everything, otherwise a period
    ///   expression (`YYYY`, `YYYY-MM`, `YYYY-MM-DD` or `start:end`).
    ///
    /// Returns the number of events written.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        let events = match range {
            None => load_all_events(&pool.conn)?,
            Some(r) if r.eq_ignore_ascii_case("all") => load_all_events(&pool.conn)?,
            Some(r) => {
                let (start, end) = parse_period(r)?.bounds();
                load_events_between(&pool.conn, start, end, &[])?
            }
        };

        if events.is_empty() {
            warning("No events found for selected range.");
            return Ok(0);
        }

        let locations: Vec<String> = location_set(&events).into_iter().collect();
        let points = cached_locations(&pool.conn, &locations)?;

        let rows: Vec<EventExport> = events
            .iter()
            .map(|ev| {
                let point = ev.location.as_ref().and_then(|l| points.get(l.trim()).copied());
                EventExport::from_event(ev, point)
            })
            .collect();

        match format {
            ExportFormat::Csv => write_csv(&path, &rows)?,
            ExportFormat::Json => write_json(&path, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(rows.len())
    }
}

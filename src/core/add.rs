use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_event, set_location};
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarEvent, GeoPoint};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Store a new event and, when coordinates are given, remember them for
    /// its location. Returns the new event id.
    pub fn apply(pool: &mut DbPool, event: &CalendarEvent, point: Option<GeoPoint>) -> AppResult<i64> {
        if event.end <= event.start {
            return Err(AppError::InvalidTime(format!(
                "end {} must be after start {}",
                event.end_str(),
                event.start_str()
            )));
        }

        // Cache update and insert land together or not at all.
        let tx = pool.conn.transaction()?;

        if let Some(p) = point {
            p.validate()?;
            let location = event.location.as_deref().ok_or_else(|| {
                AppError::InvalidInput("coordinates given without a --location".into())
            })?;
            set_location(&tx, location, p)?;
        }

        let id = insert_event(&tx, event)?;
        tx.commit()?;

        ttlog_or_warn(
            &pool.conn,
            "add",
            &id.to_string(),
            &format!(
                "Added '{}' {} → {} [{}]",
                event.title,
                event.start_str(),
                event.end_str(),
                event.calendar
            ),
        );

        Ok(id)
    }
}

use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, load_event};
use crate::errors::{AppError, AppResult};
use crate::models::CalendarEvent;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove one event, returning what was deleted.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<CalendarEvent> {
        let event = load_event(&pool.conn, id)?.ok_or(AppError::EventNotFound(id))?;

        delete_event(&pool.conn, id)?;

        ttlog_or_warn(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("Deleted '{}' {}", event.title, event.start_str()),
        );

        Ok(event)
    }
}

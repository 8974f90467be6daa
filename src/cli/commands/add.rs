use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarEvent, GeoPoint};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::at;

/// Add a calendar event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        title,
        location,
        lat,
        long,
        calendar,
    } = cmd
    {
        //
        // 1. Parse date and times
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let start_at = at(d, start)?;
        let end_at = at(d, end)?;

        //
        // 2. Optional coordinates for the location
        //
        let point = match (lat, long) {
            (Some(la), Some(lo)) => Some(GeoPoint::new(*la, *lo)?),
            _ => None,
        };

        let location = location
            .as_ref()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        let calendar = calendar.clone().unwrap_or_else(|| cfg.default_calendar.clone());

        let event = CalendarEvent::new(title.clone(), start_at, end_at, location, calendar);

        //
        // 3. Store
        //
        let mut pool = DbPool::open_migrated(&cfg.database)?;
        let id = AddLogic::apply(&mut pool, &event, point)?;

        success(format!(
            "Event #{} added: {} → {}",
            id,
            event.start_str(),
            event.end.format("%H:%M")
        ));
    }

    Ok(())
}

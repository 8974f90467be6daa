use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{fetch_events, location_set};
use crate::db::pool::DbPool;
use crate::db::queries::cached_locations;
use crate::errors::AppResult;
use crate::models::CalendarEvent;
use crate::utils::colors::{GREY, RESET};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, calendars } = cmd {
        let pool = DbPool::open_migrated(&cfg.database)?;

        let range = match period {
            Some(p) => date::parse_period(p)?,
            None => date::current_month()?,
        };

        let (start, end) = range.bounds();
        let events = fetch_events(&pool.conn, calendars, start, end)?;

        if events.is_empty() {
            println!("No events between {} and {}", range.start, range.end);
            return Ok(());
        }

        let locations: Vec<String> = location_set(&events).into_iter().collect();
        let points = cached_locations(&pool.conn, &locations)?;

        print_events(&events, &points);
    }
    Ok(())
}

fn print_events(events: &[CalendarEvent], points: &HashMap<String, crate::models::GeoPoint>) {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("START", 16),
        Column::new("END", 5),
        Column::new("TITLE", 24),
        Column::new("LOCATION", 28),
        Column::new("COORDS", 20),
        Column::new("CALENDAR", 12),
    ]);

    for ev in events {
        let location = ev.location.clone().unwrap_or_default();
        let coords = ev
            .location
            .as_deref()
            .and_then(|l| points.get(l.trim()))
            .map(|p| p.to_string())
            .unwrap_or_else(|| "--".to_string());

        let end = if ev.end.date() == ev.start.date() {
            ev.end.format("%H:%M").to_string()
        } else {
            ev.end_str()
        };

        table.add_row(vec![
            ev.id.to_string(),
            ev.start_str(),
            end,
            ev.title.clone(),
            location,
            coords,
            ev.calendar.clone(),
        ]);
    }

    print!("{}", table.render());
    println!("{GREY}{} events{RESET}", events.len());
}

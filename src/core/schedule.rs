//! Glue between the local calendar store and the suggestion engine.

use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::calendar::{fetch_events, locate_events, location_set};
use crate::core::geo::{CoordinateLiteralGeocoder, LocationResolver};
use crate::core::suggest::SuggestionEngine;
use crate::core::trace::TraceSink;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::set_location;
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarEvent, DateRange, GeoPoint, TimeSuggestion};
use chrono::Duration;

/// Where the new appointment takes place: an address, explicit coordinates,
/// or both (the coordinates then win and are cached for the address).
#[derive(Debug, Clone)]
pub struct SuggestRequest {
    pub location: Option<String>,
    pub point: Option<GeoPoint>,
    pub range: DateRange,
    pub calendars: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SuggestOutcome {
    pub target: GeoPoint,
    /// Address to store on a booked appointment.
    pub location: String,
    pub events_considered: usize,
    pub suggestions: Vec<TimeSuggestion>,
}

pub struct ScheduleLogic;

impl ScheduleLogic {
    pub fn suggest(
        pool: &mut DbPool,
        cfg: &Config,
        req: &SuggestRequest,
        sink: &mut dyn TraceSink,
    ) -> AppResult<SuggestOutcome> {
        let engine = SuggestionEngine::from_config(cfg)?;
        let resolver = LocationResolver::new(&pool.conn, CoordinateLiteralGeocoder);

        // The target must resolve before the engine runs.
        let (target, location) = match (&req.point, &req.location) {
            (Some(p), Some(loc)) => {
                p.validate()?;
                set_location(&pool.conn, loc, *p)?;
                (*p, loc.clone())
            }
            (Some(p), None) => {
                p.validate()?;
                (*p, p.to_string())
            }
            (None, Some(loc)) => (resolver.resolve_one(loc)?, loc.clone()),
            (None, None) => {
                return Err(AppError::InvalidInput(
                    "a location or coordinates are required".into(),
                ));
            }
        };

        let (start, end) = req.range.bounds();
        let events = fetch_events(&pool.conn, &req.calendars, start, end)?;
        let resolved = resolver.resolve_locations(&location_set(&events))?;
        let located = locate_events(&events, &resolved);

        let suggestions = engine.suggest_traced(target, &located, req.range, sink)?;

        ttlog_or_warn(
            &pool.conn,
            "suggest",
            &location,
            &format!(
                "{} suggestions for {}..{} over {} events",
                suggestions.len(),
                req.range.start,
                req.range.end,
                events.len()
            ),
        );

        Ok(SuggestOutcome {
            target,
            location,
            events_considered: events.len(),
            suggestions,
        })
    }

    /// Persist an appointment at the start of `suggestion`, lasting the
    /// configured appointment length.
    pub fn book(
        pool: &mut DbPool,
        cfg: &Config,
        outcome: &SuggestOutcome,
        rank: usize,
        title: &str,
        calendar: &str,
    ) -> AppResult<(i64, CalendarEvent)> {
        let suggestion = rank
            .checked_sub(1)
            .and_then(|i| outcome.suggestions.get(i))
            .ok_or(AppError::SuggestionNotFound(rank))?;

        let start = suggestion.start;
        let end = start + Duration::minutes(cfg.appointment_minutes);

        let event = CalendarEvent::new(title, start, end, Some(outcome.location.clone()), calendar);
        let id = AddLogic::apply(pool, &event, Some(outcome.target))?;

        ttlog_or_warn(
            &pool.conn,
            "book",
            &id.to_string(),
            &format!("Booked suggestion #{} (+{} km)", rank, suggestion.added_km),
        );

        Ok((id, event))
    }
}

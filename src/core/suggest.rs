//! Appointment slot suggestion engine.
//!
//! Walks a date range day by day, finds the free gaps of each working day,
//! shrinks them by the travel buffers to and from the neighbouring blocks
//! and ranks what is left by the kilometers the new appointment adds.

use crate::config::Config;
use crate::core::calculator::gaps::find_gaps;
use crate::core::calculator::normalizer::merge_busy_blocks;
use crate::core::calculator::ranking::rank_suggestions;
use crate::core::calculator::travel::TravelModel;
use crate::core::trace::{NoopSink, TraceEvent, TraceSink};
use crate::errors::{AppError, AppResult};
use crate::models::{DateRange, FreeGap, GeoPoint, LocatedEvent, TimeSuggestion, WorkingHours};
use chrono::{Duration, NaiveDate};

pub const DEFAULT_APPOINTMENT_MINUTES: i64 = 60;

/// Stateless; one engine can serve any number of requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionEngine {
    pub hours: WorkingHours,
    pub travel: TravelModel,
    pub appointment: Duration,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self {
            hours: WorkingHours::default(),
            travel: TravelModel::default(),
            appointment: Duration::minutes(DEFAULT_APPOINTMENT_MINUTES),
        }
    }
}

impl SuggestionEngine {
    pub fn new(hours: WorkingHours, travel: TravelModel, appointment: Duration) -> AppResult<Self> {
        if appointment <= Duration::zero() {
            return Err(AppError::Config(format!(
                "appointment duration must be positive, got {} min",
                appointment.num_minutes()
            )));
        }
        Ok(Self {
            hours,
            travel,
            appointment,
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(
            cfg.working_hours()?,
            TravelModel::new(cfg.average_speed_kmh, cfg.travel_rounding_minutes)?,
            Duration::minutes(cfg.appointment_minutes),
        )
    }

    /// Ranked suggestions for an appointment at `new_location` within `range`.
    pub fn suggest(
        &self,
        new_location: GeoPoint,
        events: &[LocatedEvent],
        range: DateRange,
    ) -> AppResult<Vec<TimeSuggestion>> {
        self.suggest_traced(new_location, events, range, &mut NoopSink)
    }

    /// Same as [`suggest`](Self::suggest), reporting every decision to `sink`.
    pub fn suggest_traced(
        &self,
        new_location: GeoPoint,
        events: &[LocatedEvent],
        range: DateRange,
        sink: &mut dyn TraceSink,
    ) -> AppResult<Vec<TimeSuggestion>> {
        new_location
            .validate()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        range.validate()?;

        let mut suggestions: Vec<TimeSuggestion> = range
            .days()
            .flat_map(|date| self.suggest_day(new_location, events, date, &mut *sink))
            .collect();

        rank_suggestions(&mut suggestions);
        sink.record(TraceEvent::Ranked {
            count: suggestions.len(),
        });

        Ok(suggestions)
    }

    /// Unranked suggestions for a single date, in gap order.
    pub fn suggest_day(
        &self,
        new_location: GeoPoint,
        events: &[LocatedEvent],
        date: NaiveDate,
        sink: &mut dyn TraceSink,
    ) -> Vec<TimeSuggestion> {
        let (day_start, day_end) = self.hours.window(date);
        let blocks = merge_busy_blocks(day_start, day_end, events);
        let gaps = find_gaps(day_start, day_end, &blocks);

        sink.record(TraceEvent::Day {
            date,
            window_start: day_start,
            window_end: day_end,
            blocks: blocks.len(),
            gaps: gaps.len(),
        });

        gaps.iter()
            .filter_map(|gap| self.evaluate_gap(new_location, gap, &mut *sink))
            .collect()
    }

    fn evaluate_gap(
        &self,
        new_location: GeoPoint,
        gap: &FreeGap<'_>,
        sink: &mut dyn TraceSink,
    ) -> Option<TimeSuggestion> {
        if gap.duration() < self.appointment {
            sink.record(TraceEvent::GapTooShort {
                start: gap.start,
                end: gap.end,
            });
            return None;
        }

        let outbound = self
            .travel
            .leg(gap.prev.and_then(|b| b.exit), Some(new_location));
        let inbound = self
            .travel
            .leg(Some(new_location), gap.next.and_then(|b| b.entry));

        let start = gap.start + Duration::minutes(outbound.minutes);
        let end = gap.end - Duration::minutes(inbound.minutes);

        if end - start < self.appointment {
            sink.record(TraceEvent::TravelExceedsGap {
                start: gap.start,
                end: gap.end,
                outbound,
                inbound,
            });
            return None;
        }

        let suggestion = TimeSuggestion {
            start,
            end,
            added_km: outbound.km + inbound.km,
        };
        sink.record(TraceEvent::Suggested {
            suggestion,
            outbound,
            inbound,
        });
        Some(suggestion)
    }
}

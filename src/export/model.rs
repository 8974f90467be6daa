// src/export/model.rs

use crate::models::event::DATETIME_FMT;
use crate::models::{CalendarEvent, GeoPoint, TimeSuggestion};
use serde::Serialize;

/// Flat row for event exports.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub title: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub calendar: String,
    pub source: String,
}

impl EventExport {
    pub fn from_event(ev: &CalendarEvent, point: Option<GeoPoint>) -> Self {
        Self {
            id: ev.id,
            title: ev.title.clone(),
            start: ev.start_str(),
            end: ev.end_str(),
            location: ev.location.clone().unwrap_or_default(),
            lat: point.map(|p| p.lat),
            long: point.map(|p| p.long),
            calendar: ev.calendar.clone(),
            source: ev.source.clone(),
        }
    }
}

/// Flat row for suggestion output (`suggest --json`).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SuggestionExport {
    pub rank: usize,
    pub start: String,
    pub end: String,
    pub added_km: u32,
}

impl SuggestionExport {
    pub fn ranked(suggestions: &[TimeSuggestion]) -> Vec<Self> {
        suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| Self {
                rank: i + 1,
                start: s.start.format(DATETIME_FMT).to_string(),
                end: s.end.format(DATETIME_FMT).to_string(),
                added_km: s.added_km,
            })
            .collect()
    }
}

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

/// A candidate slot for the new appointment.
///
/// `start..end` is the whole gap left after travel buffers, not a slot of
/// exactly the appointment length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSuggestion {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Outbound plus return great-circle distance in whole kilometers.
    pub added_km: u32,
}

impl TimeSuggestion {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

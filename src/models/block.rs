use super::geo::GeoPoint;
use chrono::{Duration, NaiveDateTime};

/// A maximal union of overlapping events inside one working-hours window.
///
/// `entry` is the position of the earliest-starting absorbed event, `exit`
/// the position of the event whose end reaches furthest. Either is `None`
/// when that event had no coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusyBlock {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub entry: Option<GeoPoint>,
    pub exit: Option<GeoPoint>,
}

impl BusyBlock {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

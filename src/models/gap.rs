use super::block::BusyBlock;
use chrono::{Duration, NaiveDateTime};

/// Free time between two busy blocks, or between a block and the window edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeGap<'a> {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Block immediately before the gap; `None` for the first gap of the day.
    pub prev: Option<&'a BusyBlock>,
    /// Block immediately after the gap; `None` for the last gap of the day.
    pub next: Option<&'a BusyBlock>,
}

impl FreeGap<'_> {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

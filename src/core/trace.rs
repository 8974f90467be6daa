//! Structured trace of suggestion decisions.
//!
//! The engine reports what it did through a [`TraceSink`] instead of printing,
//! so the computation stays pure and callers choose where the trace goes.

use crate::core::calculator::travel::Leg;
use crate::models::TimeSuggestion;
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// A day was normalized into `blocks` busy blocks and `gaps` free gaps.
    Day {
        date: NaiveDate,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
        blocks: usize,
        gaps: usize,
    },
    /// The gap is shorter than the appointment before any travel is considered.
    GapTooShort {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// The gap fit the appointment, but not once travel buffers were removed.
    TravelExceedsGap {
        start: NaiveDateTime,
        end: NaiveDateTime,
        outbound: Leg,
        inbound: Leg,
    },
    Suggested {
        suggestion: TimeSuggestion,
        outbound: Leg,
        inbound: Leg,
    },
    Ranked {
        count: usize,
    },
}

pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn record(&mut self, _event: TraceEvent) {}
}

/// Keeps every event in order.
#[derive(Debug, Default)]
pub struct VecSink {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for VecSink {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

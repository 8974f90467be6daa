//! Turns a day's located events into merged busy blocks.
//!
//! Events are filtered to the working-hours window, clipped to it, sorted
//! and folded into disjoint blocks that remember where the traveler arrives
//! (`entry`) and where they leave from (`exit`).

use crate::models::{BusyBlock, LocatedEvent};
use chrono::NaiveDateTime;

/// Merge the events overlapping `[day_start, day_end)` into busy blocks.
///
/// Output blocks are sorted, pairwise disjoint (strictly separated) and cover
/// exactly the union of the clipped events.
pub fn merge_busy_blocks(
    day_start: NaiveDateTime,
    day_end: NaiveDateTime,
    events: &[LocatedEvent],
) -> Vec<BusyBlock> {
    // -----------------------------
    // Filter + clip
    // -----------------------------
    let mut clipped: Vec<BusyBlock> = events
        .iter()
        .filter(|ev| overlaps(ev, day_start, day_end))
        .map(|ev| BusyBlock {
            start: ev.start.max(day_start),
            end: ev.effective_end().min(day_end),
            entry: ev.point,
            exit: ev.point,
        })
        .collect();

    // Stable: equal starts keep input order.
    clipped.sort_by_key(|b| b.start);

    // -----------------------------
    // Merge pass
    // -----------------------------
    clipped.into_iter().fold(Vec::new(), |mut blocks, ev| {
        match blocks.last_mut() {
            Some(running) if ev.start <= running.end => {
                if ev.end >= running.end {
                    running.end = ev.end;
                    running.exit = ev.exit;
                }
            }
            _ => blocks.push(ev),
        }
        blocks
    })
}

/// `end > day_start && start < day_end`, with zero-width events kept when
/// they sit inside the window.
fn overlaps(ev: &LocatedEvent, day_start: NaiveDateTime, day_end: NaiveDateTime) -> bool {
    let end = ev.effective_end();
    if end == ev.start {
        return ev.start >= day_start && ev.start < day_end;
    }
    end > day_start && ev.start < day_end
}

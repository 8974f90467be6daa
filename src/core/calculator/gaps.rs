//! Free gaps between merged busy blocks inside one working-hours window.

use crate::models::{BusyBlock, FreeGap};
use chrono::NaiveDateTime;

/// Complement of `blocks` within `[day_start, day_end)`.
///
/// `blocks` must come from [`merge_busy_blocks`](super::normalizer::merge_busy_blocks)
/// for the same window. With no blocks the single gap spans the whole window.
pub fn find_gaps<'a>(
    day_start: NaiveDateTime,
    day_end: NaiveDateTime,
    blocks: &'a [BusyBlock],
) -> Vec<FreeGap<'a>> {
    let (Some(first), Some(last)) = (blocks.first(), blocks.last()) else {
        return vec![FreeGap {
            start: day_start,
            end: day_end,
            prev: None,
            next: None,
        }];
    };

    let mut gaps = Vec::with_capacity(blocks.len() + 1);

    if first.start > day_start {
        gaps.push(FreeGap {
            start: day_start,
            end: first.start,
            prev: None,
            next: Some(first),
        });
    }

    for w in blocks.windows(2) {
        let (before, after) = (&w[0], &w[1]);
        if after.start > before.end {
            gaps.push(FreeGap {
                start: before.end,
                end: after.start,
                prev: Some(before),
                next: Some(after),
            });
        }
    }

    if last.end < day_end {
        gaps.push(FreeGap {
            start: last.end,
            end: day_end,
            prev: Some(last),
            next: None,
        });
    }

    gaps
}

mod common;
use common::{dt, ev, pt};
use chrono::Duration;
use routeslot::core::calculator::gaps::find_gaps;
use routeslot::core::calculator::normalizer::merge_busy_blocks;

#[test]
fn test_empty_day_is_one_gap() {
    let gaps = find_gaps(dt(8, 0), dt(18, 0), &[]);

    assert_eq!(gaps.len(), 1);
    assert_eq!((gaps[0].start, gaps[0].end), (dt(8, 0), dt(18, 0)));
    assert!(gaps[0].prev.is_none());
    assert!(gaps[0].next.is_none());
}

#[test]
fn test_gaps_before_between_and_after() {
    let a = pt(55.0, 12.0);
    let b = pt(56.0, 13.0);
    let blocks = merge_busy_blocks(
        dt(8, 0),
        dt(18, 0),
        &[ev((10, 0), (11, 0), Some(a)), ev((14, 0), (15, 0), Some(b))],
    );

    let gaps = find_gaps(dt(8, 0), dt(18, 0), &blocks);

    assert_eq!(gaps.len(), 3);
    assert_eq!((gaps[0].start, gaps[0].end), (dt(8, 0), dt(10, 0)));
    assert!(gaps[0].prev.is_none());
    assert_eq!(gaps[0].next.and_then(|b| b.entry), Some(a));

    assert_eq!((gaps[1].start, gaps[1].end), (dt(11, 0), dt(14, 0)));
    assert_eq!(gaps[1].prev.and_then(|b| b.exit), Some(a));
    assert_eq!(gaps[1].next.and_then(|b| b.entry), Some(b));

    assert_eq!((gaps[2].start, gaps[2].end), (dt(15, 0), dt(18, 0)));
    assert!(gaps[2].next.is_none());
}

#[test]
fn test_blocks_at_window_edges_leave_no_edge_gaps() {
    let blocks = merge_busy_blocks(
        dt(8, 0),
        dt(18, 0),
        &[ev((8, 0), (9, 0), None), ev((17, 0), (18, 0), None)],
    );

    let gaps = find_gaps(dt(8, 0), dt(18, 0), &blocks);

    assert_eq!(gaps.len(), 1);
    assert_eq!((gaps[0].start, gaps[0].end), (dt(9, 0), dt(17, 0)));
}

#[test]
fn test_busy_and_free_time_add_up_to_window() {
    let blocks = merge_busy_blocks(
        dt(8, 0),
        dt(18, 0),
        &[
            ev((7, 0), (9, 30), None),
            ev((9, 0), (10, 0), None),
            ev((12, 0), (12, 45), None),
            ev((16, 0), (19, 0), None),
        ],
    );

    let gaps = find_gaps(dt(8, 0), dt(18, 0), &blocks);

    let busy: Duration = blocks.iter().map(|b| b.duration()).sum();
    let free: Duration = gaps.iter().map(|g| g.duration()).sum();
    assert_eq!(busy + free, Duration::hours(10));
}

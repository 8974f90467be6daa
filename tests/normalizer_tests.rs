mod common;
use common::{dt, ev, pt};
use routeslot::core::calculator::normalizer::merge_busy_blocks;

#[test]
fn test_overlapping_events_merge_and_keep_entry_exit() {
    let a = pt(55.0, 12.0);
    let b = pt(56.0, 13.0);
    let events = vec![ev((10, 0), (12, 0), Some(a)), ev((11, 0), (13, 0), Some(b))];

    let blocks = merge_busy_blocks(dt(8, 0), dt(18, 0), &events);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].start, dt(10, 0));
    assert_eq!(blocks[0].end, dt(13, 0));
    assert_eq!(blocks[0].entry, Some(a));
    assert_eq!(blocks[0].exit, Some(b));
}

#[test]
fn test_touching_events_merge() {
    let a = pt(55.0, 12.0);
    let b = pt(55.5, 12.0);
    let events = vec![ev((9, 0), (10, 0), Some(a)), ev((10, 0), (11, 0), Some(b))];

    let blocks = merge_busy_blocks(dt(8, 0), dt(18, 0), &events);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].end, dt(11, 0));
    assert_eq!(blocks[0].exit, Some(b));
}

#[test]
fn test_contained_event_does_not_change_exit() {
    let a = pt(55.0, 12.0);
    let inner = pt(55.3, 12.0);
    let events = vec![ev((9, 0), (12, 0), Some(a)), ev((10, 0), (11, 0), Some(inner))];

    let blocks = merge_busy_blocks(dt(8, 0), dt(18, 0), &events);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].end, dt(12, 0));
    assert_eq!(blocks[0].exit, Some(a));
}

#[test]
fn test_equal_end_takes_later_exit() {
    let a = pt(55.0, 12.0);
    let b = pt(55.2, 12.0);
    let events = vec![ev((9, 0), (12, 0), Some(a)), ev((11, 0), (12, 0), Some(b))];

    let blocks = merge_busy_blocks(dt(8, 0), dt(18, 0), &events);

    assert_eq!(blocks[0].exit, Some(b));
    assert_eq!(blocks[0].entry, Some(a));
}

#[test]
fn test_events_are_clipped_and_filtered_to_window() {
    let events = vec![
        ev((6, 0), (7, 0), None),
        ev((7, 0), (9, 0), None),
        ev((17, 0), (20, 0), None),
        ev((18, 0), (19, 0), None),
    ];

    let blocks = merge_busy_blocks(dt(8, 0), dt(18, 0), &events);

    assert_eq!(blocks.len(), 2);
    assert_eq!((blocks[0].start, blocks[0].end), (dt(8, 0), dt(9, 0)));
    assert_eq!((blocks[1].start, blocks[1].end), (dt(17, 0), dt(18, 0)));
}

#[test]
fn test_unsorted_input_gives_sorted_disjoint_blocks() {
    let events = vec![
        ev((15, 0), (16, 0), None),
        ev((9, 0), (10, 0), None),
        ev((12, 0), (13, 0), None),
    ];

    let blocks = merge_busy_blocks(dt(8, 0), dt(18, 0), &events);

    assert_eq!(blocks.len(), 3);
    for w in blocks.windows(2) {
        assert!(w[0].end < w[1].start);
    }
}

#[test]
fn test_zero_width_event_inside_window_is_a_block() {
    let p = pt(55.0, 12.0);
    let events = vec![ev((12, 0), (12, 0), Some(p))];

    let blocks = merge_busy_blocks(dt(8, 0), dt(18, 0), &events);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].start, blocks[0].end);
    assert_eq!(blocks[0].exit, Some(p));
}

#[test]
fn test_negative_duration_is_clamped_to_start() {
    let events = vec![ev((12, 0), (11, 0), None)];

    let blocks = merge_busy_blocks(dt(8, 0), dt(18, 0), &events);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].end, dt(12, 0));
}

#[test]
fn test_no_events_no_blocks() {
    assert!(merge_busy_blocks(dt(8, 0), dt(18, 0), &[]).is_empty());
}

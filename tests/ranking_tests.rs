mod common;
use common::dt;
use routeslot::core::calculator::ranking::rank_suggestions;
use routeslot::models::TimeSuggestion;

fn s(h: u32, km: u32) -> TimeSuggestion {
    TimeSuggestion {
        start: dt(h, 0),
        end: dt(h + 1, 0),
        added_km: km,
    }
}

#[test]
fn test_ranked_by_km_then_start_with_zero_last() {
    let mut list = vec![s(8, 0), s(12, 5), s(9, 5), s(15, 3), s(10, 0)];

    rank_suggestions(&mut list);

    let order: Vec<(u32, u32)> = list
        .iter()
        .map(|x| (x.added_km, x.start.format("%H").to_string().parse().unwrap()))
        .collect();
    assert_eq!(order, vec![(3, 15), (5, 9), (5, 12), (0, 8), (0, 10)]);
}

#[test]
fn test_ranking_is_stable_for_repeated_runs() {
    let mut a = vec![s(14, 7), s(8, 0), s(9, 7)];
    let mut b = a.clone();
    b.reverse();

    rank_suggestions(&mut a);
    rank_suggestions(&mut b);

    assert_eq!(a, b);
}

use crate::models::TimeSuggestion;
use std::cmp::Ordering;

/// Sort by added kilometers ascending, then by start.
///
/// Zero-cost suggestions (no neighbouring appointment on either side) carry
/// no routing benefit and go after every costed one.
pub fn rank_suggestions(suggestions: &mut [TimeSuggestion]) {
    suggestions.sort_by(compare);
}

fn compare(a: &TimeSuggestion, b: &TimeSuggestion) -> Ordering {
    rank_key(a).cmp(&rank_key(b)).then_with(|| a.start.cmp(&b.start))
}

fn rank_key(s: &TimeSuggestion) -> (bool, u32) {
    (s.added_km == 0, s.added_km)
}

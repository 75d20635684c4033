// crates/dendrite-trust/src/edge_weight.rs
//
// Pairwise disagreement between two moderators.
//
// The weight of the edge between moderators A and B is the fraction of
// commonly rated items on which they disagree. 0 means perfect agreement,
// 1 means total disagreement or no shared items at all.

use dendrite_core::{is_valid_id, RatingsTable, NO_CONNECTION_WEIGHT};

/// Compute the disagreement weight of the edge between two moderators.
///
/// `ignored_item` is left out of the overlap so that the item currently being
/// evaluated cannot influence how much its own raters are trusted. An empty
/// ignored id excludes nothing.
///
/// The result is symmetric in `moderator_a` / `moderator_b` and always lies
/// in [0, 1].
pub fn edge_weight(
    moderator_a: &str,
    moderator_b: &str,
    ratings: &RatingsTable,
    ignored_item: Option<&str>,
) -> f64 {
    if !is_valid_id(moderator_a) || !is_valid_id(moderator_b) {
        return NO_CONNECTION_WEIGHT;
    }
    let (Some(first), Some(second)) = (
        ratings.moderator_ratings(moderator_a),
        ratings.moderator_ratings(moderator_b),
    ) else {
        return NO_CONNECTION_WEIGHT;
    };

    let ignored = ignored_item.filter(|id| is_valid_id(id));

    let mut overlap = 0usize;
    let mut agreements = 0usize;
    for (item, approved) in first {
        if ignored == Some(item.as_str()) {
            continue;
        }
        if let Some(other) = second.get(item) {
            overlap += 1;
            if approved == other {
                agreements += 1;
            }
        }
    }

    if overlap == 0 {
        return NO_CONNECTION_WEIGHT;
    }

    1.0 - agreements as f64 / overlap as f64
}

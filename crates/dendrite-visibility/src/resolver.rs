// crates/dendrite-visibility/src/resolver.rs
//
// Admin override and trust-weighted consensus.
//
// Rules, in order:
// 1. Invalid item or admin id: visible.
// 2. The admin rated the item: the admin's decision, nothing else consulted.
// 3. No other moderator rated it: visible.
// 4. Exactly one did: that moderator's decision, unweighted.
// 5. Otherwise: approvals weighted by each rater's influence (1 - trust
//    distance to the admin). If nobody carries any influence: visible.

use std::borrow::Cow;

use dendrite_core::{is_valid_id, RatingsTable, Visibility, NO_PATH_DISTANCE};
use dendrite_trust::{shortest_distance_to_admin, DistanceQuery};
use serde::Serialize;

use crate::request::VisibilityRequest;

/// How much one rater's vote counted toward the consensus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaterInfluence {
    pub moderator_id: String,
    pub approved: bool,
    /// Clamped trust distance to the admin, in [0, 1].
    pub distance: f64,
    /// `1 - distance`.
    pub influence: f64,
}

/// The visibility decision together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum VisibilityOutcome {
    /// Item or admin id was empty.
    InvalidRequest,
    /// The admin rated the item directly.
    AdminOverride { approved: bool },
    /// Nobody but (possibly) the admin has an entry for the item.
    NoRaters,
    /// Exactly one non-admin moderator rated the item.
    SingleRater { moderator_id: String, approved: bool },
    /// Several raters, none with a trust path to the admin.
    Untrusted { raters: Vec<RaterInfluence> },
    /// Several raters, combined by influence.
    Weighted {
        score: f64,
        raters: Vec<RaterInfluence>,
    },
}

impl VisibilityOutcome {
    /// The resulting visibility score.
    pub fn visibility(&self) -> Visibility {
        match self {
            VisibilityOutcome::InvalidRequest
            | VisibilityOutcome::NoRaters
            | VisibilityOutcome::Untrusted { .. } => Visibility::VISIBLE,
            VisibilityOutcome::AdminOverride { approved }
            | VisibilityOutcome::SingleRater { approved, .. } => Visibility::from_approval(*approved),
            VisibilityOutcome::Weighted { score, .. } => Visibility::new(*score),
        }
    }

    /// Short name of the rule that decided the outcome.
    pub fn rule(&self) -> &'static str {
        match self {
            VisibilityOutcome::InvalidRequest => "invalid_request",
            VisibilityOutcome::AdminOverride { .. } => "admin_override",
            VisibilityOutcome::NoRaters => "no_raters",
            VisibilityOutcome::SingleRater { .. } => "single_rater",
            VisibilityOutcome::Untrusted { .. } => "untrusted",
            VisibilityOutcome::Weighted { .. } => "weighted",
        }
    }

    /// Per-rater breakdown; empty unless consensus weighting ran.
    pub fn raters(&self) -> &[RaterInfluence] {
        match self {
            VisibilityOutcome::Untrusted { raters } | VisibilityOutcome::Weighted { raters, .. } => {
                raters.as_slice()
            }
            _ => &[],
        }
    }
}

/// Score an item and return the decimal string of its visibility.
///
/// Never fails: every case without enough signal yields `"1"`.
pub fn calculate_visibility(request: &VisibilityRequest) -> String {
    resolve_visibility(request).visibility().to_string()
}

/// Apply the visibility rules and report which one decided.
pub fn resolve_visibility(request: &VisibilityRequest) -> VisibilityOutcome {
    let item_id = request.item_id.as_str();
    let admin_id = request.admin_id.as_str();
    if !is_valid_id(item_id) || !is_valid_id(admin_id) {
        return VisibilityOutcome::InvalidRequest;
    }

    let ratings = with_admin_entry(&request.ratings, admin_id);

    if let Some(approved) = ratings.rating(admin_id, item_id) {
        tracing::debug!(item = item_id, approved, "admin override");
        return VisibilityOutcome::AdminOverride { approved };
    }

    let raters = collect_raters(&ratings, item_id, admin_id);
    match raters.as_slice() {
        [] => VisibilityOutcome::NoRaters,
        [(moderator_id, approved)] => VisibilityOutcome::SingleRater {
            moderator_id: moderator_id.to_string(),
            approved: *approved,
        },
        _ => weighted_consensus(&ratings, item_id, admin_id, &raters),
    }
}

/// Force a distance into [0, 1]; non-finite values mean "no path".
pub fn clamp_distance(distance: f64) -> f64 {
    if !distance.is_finite() {
        return NO_PATH_DISTANCE;
    }
    distance.clamp(0.0, NO_PATH_DISTANCE)
}

/// The admin must be a graph node even when it has never rated anything.
fn with_admin_entry<'a>(ratings: &'a RatingsTable, admin_id: &str) -> Cow<'a, RatingsTable> {
    if ratings.contains_moderator(admin_id) {
        return Cow::Borrowed(ratings);
    }
    let mut owned = ratings.clone();
    owned.ensure_moderator(admin_id);
    Cow::Owned(owned)
}

/// Non-admin moderators who rated the item, in table order.
fn collect_raters<'a>(ratings: &'a RatingsTable, item_id: &str, admin_id: &str) -> Vec<(&'a str, bool)> {
    ratings
        .iter()
        .filter(|(moderator_id, _)| *moderator_id != admin_id)
        .filter_map(|(moderator_id, items)| items.get(item_id).map(|approved| (moderator_id, *approved)))
        .collect()
}

fn weighted_consensus(
    ratings: &RatingsTable,
    item_id: &str,
    admin_id: &str,
    raters: &[(&str, bool)],
) -> VisibilityOutcome {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut breakdown = Vec::with_capacity(raters.len());

    for &(moderator_id, approved) in raters {
        let query = DistanceQuery::new(moderator_id, admin_id, ratings).ignoring(item_id);
        let distance = clamp_distance(shortest_distance_to_admin(&query));
        let influence = 1.0 - distance;

        if approved {
            weighted_sum += influence;
        }
        total_weight += influence;

        breakdown.push(RaterInfluence {
            moderator_id: moderator_id.to_string(),
            approved,
            distance,
            influence,
        });
    }

    if total_weight == 0.0 {
        tracing::debug!(item = item_id, raters = raters.len(), "no rater has influence, defaulting to visible");
        return VisibilityOutcome::Untrusted { raters: breakdown };
    }

    let score = weighted_sum / total_weight;
    tracing::debug!(item = item_id, score, total_weight, "weighted consensus");
    VisibilityOutcome::Weighted {
        score,
        raters: breakdown,
    }
}

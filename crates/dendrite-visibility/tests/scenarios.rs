// crates/dendrite-visibility/tests/scenarios.rs
//
// End-to-end visibility scenarios.
//
// Each scenario is sent through the JSON envelope entry point, the way a
// request handler would call the resolver, and checked against the exact
// decimal string it must produce.

use serde_json::{json, Value};

use dendrite_core::RatingsTable;
use dendrite_trust::{edge_weight, shortest_distance_to_admin, DistanceQuery};
use dendrite_visibility::{
    calculate_visibility, calculate_visibility_json, resolve_visibility, VisibilityOutcome,
    VisibilityRequest,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Score page-P with matt as admin through the JSON entry point.
fn score(ratings: Value) -> String {
    let envelope = json!({
        "pageId": "page-P",
        "adminId": "matt",
        "ratings": ratings,
    });
    calculate_visibility_json(&envelope.to_string())
}

// ---------------------------------------------------------------------------
// Admin override
// ---------------------------------------------------------------------------

#[test]
fn admin_approved() {
    let result = score(json!({
        "matt": { "page-P": true },
        "alice": { "page-P": true },
        "bob": { "page-P": false },
    }));
    assert_eq!(result, "1");
}

#[test]
fn admin_rejected() {
    let result = score(json!({
        "matt": { "page-P": false },
        "alice": { "page-P": true },
        "bob": { "page-P": true },
        "carol": { "page-P": true },
    }));
    assert_eq!(result, "0");
}

// ---------------------------------------------------------------------------
// Shortcuts
// ---------------------------------------------------------------------------

#[test]
fn no_ratings_for_the_page() {
    let result = score(json!({
        "matt": { "page-A": true },
        "alice": { "page-B": false },
    }));
    assert_eq!(result, "1");
}

#[test]
fn single_rating_approved() {
    let result = score(json!({
        "matt": { "page-A": true, "page-B": false },
        "alice": { "page-A": true, "page-B": false, "page-P": true },
    }));
    assert_eq!(result, "1");
}

#[test]
fn single_rating_rejected() {
    let result = score(json!({
        "matt": { "page-A": true, "page-B": false },
        "kate": { "page-P": false },
    }));
    assert_eq!(result, "0");
}

#[test]
fn only_admin_has_ratings() {
    let result = score(json!({ "matt": { "page-A": true, "page-B": false } }));
    assert_eq!(result, "1");
}

#[test]
fn empty_ratings_fail_open() {
    let request = VisibilityRequest::new("P", "A", RatingsTable::new());
    assert_eq!(calculate_visibility(&request), "1");
}

// ---------------------------------------------------------------------------
// Weighted consensus
// ---------------------------------------------------------------------------

#[test]
fn direct_overlap_with_admin() {
    // bob disagrees with matt on everything and carries no influence.
    let result = score(json!({
        "matt": { "page-A": true, "page-B": false, "page-C": true },
        "alice": { "page-A": true, "page-B": false, "page-C": true, "page-P": true },
        "bob": { "page-A": false, "page-B": true, "page-C": false, "page-P": false },
    }));
    assert_eq!(result, "1");
}

#[test]
fn reaches_admin_via_intermediary() {
    let result = score(json!({
        "matt": { "page-A": true, "page-B": false },
        "alice": { "page-A": true, "page-B": false, "page-C": true, "page-D": false },
        "dave": { "page-C": true, "page-D": false, "page-P": true },
        "eve": { "page-P": false },
    }));
    assert_eq!(result, "1");
}

#[test]
fn indirect_path_exhausts_budget() {
    // frank -> eve -> matt costs 0.5 + 0.5, so nobody has influence.
    let result = score(json!({
        "matt": { "page-A": true, "page-B": false },
        "eve": { "page-A": true, "page-B": true, "page-C": true, "page-D": false },
        "frank": { "page-C": false, "page-D": false, "page-P": false },
        "grace": { "page-P": true },
    }));
    assert_eq!(result, "1");
}

#[test]
fn multiple_paths_shortest_wins() {
    let result = score(json!({
        "matt": { "page-A": true, "page-B": false },
        "grace": { "page-A": true, "page-B": false, "page-C": true },
        "henry": { "page-A": false, "page-B": true, "page-C": true, "page-D": true },
        "ivy": { "page-C": true, "page-D": true, "page-P": false },
        "jack": { "page-E": true, "page-P": true },
    }));
    assert_eq!(result, "0");
}

#[test]
fn partial_agreement_creates_fractional_influence() {
    let result = score(json!({
        "matt": { "page-A": true, "page-B": false, "page-C": true, "page-D": false },
        "carol": { "page-A": true, "page-B": false, "page-C": false, "page-D": true, "page-P": true },
        "dan": { "page-E": true, "page-P": false },
    }));
    assert_eq!(result, "1");
}

#[test]
fn chain_breaks_at_disagreeing_moderator() {
    let result = score(json!({
        "matt": { "page-A": true },
        "larry": { "page-A": false, "page-B": true },
        "mary": { "page-B": true, "page-C": true },
        "nancy": { "page-C": true, "page-P": true },
        "oscar": { "page-P": false },
    }));
    assert_eq!(result, "1");
}

#[test]
fn equal_influences_split_vote() {
    let result = score(json!({
        "matt": { "page-A": true, "page-B": false },
        "alice": { "page-A": true, "page-B": false, "page-P": true },
        "bob": { "page-A": true, "page-B": false, "page-P": false },
    }));
    assert_eq!(result, "0.5");
}

#[test]
fn three_hop_path_beats_two_hop() {
    let result = score(json!({
        "matt": { "page-A": true, "page-B": false },
        "oscar": { "page-A": false, "page-B": false, "page-C": true },
        "quinn": { "page-A": true, "page-B": false, "page-D": true, "page-E": true },
        "rachel": { "page-E": true, "page-P": true },
        "sam": { "page-C": true, "page-P": false },
    }));
    assert_eq!(result, "0.6666666666666666");
}

#[test]
fn disconnected_moderators() {
    let result = score(json!({
        "matt": { "page-A": true, "page-B": false },
        "alice": { "page-A": true, "page-B": false },
        "jack": { "page-X": true, "page-Y": false, "page-P": true },
        "jill": { "page-X": true, "page-Y": false, "page-P": false },
    }));
    assert_eq!(result, "1");
}

#[test]
fn admin_has_no_ratings() {
    let result = score(json!({
        "matt": {},
        "alice": { "page-P": true },
        "bob": { "page-P": false },
    }));
    assert_eq!(result, "1");
}

#[test]
fn complex_graph_with_multiple_viable_paths() {
    let result = score(json!({
        "matt": { "page-A": true, "page-B": false, "page-C": true },
        "alice": { "page-A": true, "page-B": false, "page-D": true },
        "bob": { "page-B": false, "page-C": true, "page-E": true },
        "carol": { "page-D": true, "page-E": true, "page-F": true },
        "dave": { "page-F": true, "page-P": true },
    }));
    assert_eq!(result, "1");
}

#[test]
fn weighted_average_with_three_moderators() {
    let result = score(json!({
        "matt": { "page-A": true, "page-B": false },
        "alice": { "page-A": true, "page-B": false, "page-P": true },
        "bob": { "page-A": true, "page-B": true, "page-P": false },
        "carol": { "page-A": false, "page-B": false, "page-P": true },
    }));
    assert_eq!(result, "0.75");
}

// ---------------------------------------------------------------------------
// Malformed input
// ---------------------------------------------------------------------------

#[test]
fn malformed_envelopes_default_to_visible() {
    assert_eq!(calculate_visibility_json("not-json"), "1");
    assert_eq!(calculate_visibility_json("42"), "1");
    assert_eq!(calculate_visibility_json("[]"), "1");
    assert_eq!(
        calculate_visibility_json(r#"["page-P", "matt", { "bob": { "page-P": false } }]"#),
        "1"
    );
    assert_eq!(calculate_visibility_json(r#"{ "pageId": 3, "adminId": "matt" }"#), "1");
}

#[test]
fn malformed_rating_entries_are_dropped() {
    // bob's non-boolean vote is discarded, leaving alice as the single rater.
    let result = score(json!({
        "matt": "garbage",
        "alice": { "page-P": false },
        "bob": { "page-P": "true" },
    }));
    assert_eq!(result, "0");
}

// ---------------------------------------------------------------------------
// Cross-crate properties
// ---------------------------------------------------------------------------

#[test]
fn ignored_item_does_not_change_trust() {
    let without = RatingsTable::from_json_value(&json!({
        "matt": { "page-A": true, "page-B": false },
        "alice": { "page-A": true, "page-B": true },
    }));
    let with = RatingsTable::from_json_value(&json!({
        "matt": { "page-A": true, "page-B": false, "page-P": false },
        "alice": { "page-A": true, "page-B": true, "page-P": true },
    }));

    assert_eq!(
        edge_weight("alice", "matt", &without, Some("page-P")),
        edge_weight("alice", "matt", &with, Some("page-P")),
    );
    let d_without =
        shortest_distance_to_admin(&DistanceQuery::new("alice", "matt", &without).ignoring("page-P"));
    let d_with =
        shortest_distance_to_admin(&DistanceQuery::new("alice", "matt", &with).ignoring("page-P"));
    assert_eq!(d_without, d_with);
}

#[test]
fn outcome_rule_matches_scenario() {
    let table = RatingsTable::from_json_value(&json!({
        "matt": { "page-A": true, "page-B": false },
        "alice": { "page-A": true, "page-B": false, "page-P": true },
        "bob": { "page-A": true, "page-B": false, "page-P": false },
    }));
    let outcome = resolve_visibility(&VisibilityRequest::new("page-P", "matt", table));
    assert!(matches!(outcome, VisibilityOutcome::Weighted { .. }));
    assert_eq!(outcome.rule(), "weighted");
    assert_eq!(outcome.raters().len(), 2);
}

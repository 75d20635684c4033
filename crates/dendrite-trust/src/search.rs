// crates/dendrite-trust/src/search.rs
//
// Trust-distance search: cheapest agreement path from a moderator to the admin.
//
// A Dijkstra-style search over the implicit moderator graph. Nodes are every
// moderator in the ratings table plus the two endpoints; edges connect every
// pair and are weighted by `edge_weight`. The search budget is
// NO_PATH_DISTANCE: any path reaching it is abandoned, which bounds the
// search on dense or cyclic graphs.

use std::collections::BTreeMap;

use dendrite_core::{is_valid_id, RatingsTable, NO_PATH_DISTANCE};

use crate::edge_weight::edge_weight;
use crate::frontier::{Frontier, FrontierEntry};

/// Inputs for a single trust-distance lookup.
#[derive(Debug, Clone, Copy)]
pub struct DistanceQuery<'a> {
    /// Moderator whose trust is being measured.
    pub moderator_id: &'a str,
    /// The authoritative admin the path must reach.
    pub admin_id: &'a str,
    /// Ratings that define the implicit graph.
    pub ratings: &'a RatingsTable,
    /// Item left out of every edge-weight computation, if any.
    pub ignored_item: Option<&'a str>,
}

impl<'a> DistanceQuery<'a> {
    pub fn new(moderator_id: &'a str, admin_id: &'a str, ratings: &'a RatingsTable) -> Self {
        Self {
            moderator_id,
            admin_id,
            ratings,
            ignored_item: None,
        }
    }

    /// Exclude `item` from the overlap used for every edge weight.
    pub fn ignoring(mut self, item: &'a str) -> Self {
        self.ignored_item = Some(item);
        self
    }
}

/// Find the minimum cumulative disagreement between a moderator and the admin.
///
/// Returns a value in [0, 1]:
/// - `0` when the moderator is the admin, or a chain of perfect agreement exists.
/// - `NO_PATH_DISTANCE` (1) when either id is empty or no path stays under budget.
pub fn shortest_distance_to_admin(query: &DistanceQuery<'_>) -> f64 {
    if !is_valid_id(query.moderator_id) || !is_valid_id(query.admin_id) {
        return NO_PATH_DISTANCE;
    }
    if query.moderator_id == query.admin_id {
        return 0.0;
    }

    TrustSearch::new(query).run()
}

/// Trust distance of every moderator in the table (and the admin) to `admin_id`.
pub fn distances_to_admin(
    ratings: &RatingsTable,
    admin_id: &str,
    ignored_item: Option<&str>,
) -> BTreeMap<String, f64> {
    let mut ids: Vec<&str> = ratings.moderators().collect();
    if is_valid_id(admin_id) && !ratings.contains_moderator(admin_id) {
        ids.push(admin_id);
    }

    ids.into_iter()
        .map(|moderator_id| {
            let query = DistanceQuery {
                moderator_id,
                admin_id,
                ratings,
                ignored_item,
            };
            (moderator_id.to_string(), shortest_distance_to_admin(&query))
        })
        .collect()
}

/// Working state for one search.
struct TrustSearch<'a> {
    ratings: &'a RatingsTable,
    ignored_item: Option<&'a str>,
    nodes: Vec<&'a str>,
    start: usize,
    admin: usize,
    visited: Vec<bool>,
    best_known: Vec<Option<f64>>,
    frontier: Frontier,
    best_distance: f64,
}

impl<'a> TrustSearch<'a> {
    fn new(query: &DistanceQuery<'a>) -> Self {
        let nodes = node_list(query.ratings, query.moderator_id, query.admin_id);
        let position = |id: &str| nodes.iter().position(|n| *n == id).unwrap_or_default();
        let start = position(query.moderator_id);
        let admin = position(query.admin_id);
        let n = nodes.len();

        Self {
            ratings: query.ratings,
            ignored_item: query.ignored_item,
            nodes,
            start,
            admin,
            visited: vec![false; n],
            best_known: vec![None; n],
            frontier: Frontier::new(),
            best_distance: NO_PATH_DISTANCE,
        }
    }

    fn run(mut self) -> f64 {
        self.best_known[self.start] = Some(0.0);
        self.frontier.push(self.start, 0.0);

        while let Some(current) = self.frontier.pop() {
            if self.visited[current.node] {
                continue;
            }
            self.visited[current.node] = true;

            if current.node == self.admin {
                // Entries pop in ascending order, so the first admin visit is optimal.
                self.best_distance = current.distance;
                self.frontier.clear();
                tracing::trace!(
                    distance = current.distance,
                    from = self.nodes[self.start],
                    "trust search reached admin"
                );
                continue;
            }
            if current.distance >= self.best_distance {
                self.frontier.clear();
                continue;
            }
            if current.distance >= NO_PATH_DISTANCE {
                continue;
            }

            self.expand(current);
        }

        if self.best_distance >= NO_PATH_DISTANCE {
            tracing::trace!(from = self.nodes[self.start], "no trust path to admin within budget");
        }
        self.best_distance
    }

    fn expand(&mut self, current: FrontierEntry) {
        let from = self.nodes[current.node];

        for neighbor in 0..self.nodes.len() {
            if neighbor == current.node {
                continue;
            }
            let weight = edge_weight(from, self.nodes[neighbor], self.ratings, self.ignored_item);
            let next = current.distance + weight;
            if weight >= NO_PATH_DISTANCE || next >= NO_PATH_DISTANCE || next >= self.best_distance {
                continue;
            }
            if self.best_known[neighbor].is_some_and(|known| known <= next) {
                continue;
            }
            self.best_known[neighbor] = Some(next);
            self.frontier.push(neighbor, next);
        }
    }
}

/// Table moderators in order, followed by whichever endpoints are missing.
fn node_list<'a>(ratings: &'a RatingsTable, moderator_id: &'a str, admin_id: &'a str) -> Vec<&'a str> {
    let mut nodes: Vec<&'a str> = ratings.moderators().collect();
    for id in [moderator_id, admin_id] {
        if !nodes.contains(&id) {
            nodes.push(id);
        }
    }
    nodes
}

// crates/dendrite-trust/src/lib.rs
//
// dendrite-trust: Edge weights and trust distance for Dendrite moderation.
//
// Moderators form an implicit graph: every pair is connected by an edge whose
// weight is their disagreement rate on items they both rated. Trust distance
// is the cheapest path from a moderator to the admin through that graph,
// capped at 1. Nothing is persisted; the graph is rebuilt from the ratings
// table on every call.

pub mod edge_weight;
pub mod frontier;
pub mod search;

pub use edge_weight::edge_weight;
pub use search::{distances_to_admin, shortest_distance_to_admin, DistanceQuery};

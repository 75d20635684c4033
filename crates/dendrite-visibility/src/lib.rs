// crates/dendrite-visibility/src/lib.rs
//
// dendrite-visibility: Visibility resolution for crowd-moderated content.
//
// Decides whether a content variant is shown. The admin's own rating wins
// outright; otherwise each moderator's vote is weighted by how closely their
// rating history tracks the admin's (see dendrite-trust). Every path that
// lacks enough data fails open to visible.

pub mod counts;
pub mod request;
pub mod resolver;

pub use counts::{
    moderator_rating_counts, moderator_rating_counts_json, valid_records, ModeratorRatingCount,
};
pub use request::{calculate_visibility_json, VisibilityRequest};
pub use resolver::{
    calculate_visibility, clamp_distance, resolve_visibility, RaterInfluence, VisibilityOutcome,
};

// crates/dendrite-core/src/lib.rs
//
// dendrite-core: Core types and error handling for Dendrite moderation.
//
// This is the leaf crate that the trust and visibility crates depend on.
// It defines the ratings table (the sole input to every trust computation),
// flat rating records as stored by the submission flow, the visibility score
// type, and the shared error enum used by the request-handling shell.

pub mod constants;
pub mod error;
pub mod ratings;
pub mod record;
pub mod visibility;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use dendrite_core::RatingsTable;`

pub use constants::{DEFAULT_VISIBILITY, NO_CONNECTION_WEIGHT, NO_PATH_DISTANCE};
pub use error::DendriteError;
pub use ratings::{ModeratorRatings, RatingsTable};
pub use record::RatingRecord;
pub use visibility::Visibility;

/// Returns `true` when `id` can name a moderator, admin, or item.
///
/// Identifiers are opaque; the only requirement is that they are non-empty.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
}

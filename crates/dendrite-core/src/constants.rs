// crates/dendrite-core/src/constants.rs
//
// Shared numeric sentinels for the trust graph and the visibility resolver.

/// Distance reported when no trust path to the admin exists within budget.
///
/// Also the exclusive upper bound of the search budget: a path whose
/// cumulative distance reaches this value is abandoned.
pub const NO_PATH_DISTANCE: f64 = 1.0;

/// Edge weight between two moderators with no usable shared signal.
pub const NO_CONNECTION_WEIGHT: f64 = 1.0;

/// Visibility string returned whenever there is not enough data to decide.
pub const DEFAULT_VISIBILITY: &str = "1";

// crates/dendrite-core/src/visibility.rs
//
// Visibility score in [0, 1], rendered as a decimal string on output.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How visible a content variant should be: 0 hides it, 1 shows it.
///
/// Scores between the two come from weighted moderator consensus. The
/// `Display` impl prints the shortest decimal that round-trips, so whole
/// values render as `"0"` / `"1"` and fractions as e.g. `"0.75"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Visibility(f64);

impl Visibility {
    /// Fully visible; also the fail-open default.
    pub const VISIBLE: Visibility = Visibility(1.0);
    /// Fully hidden.
    pub const HIDDEN: Visibility = Visibility(0.0);

    /// Create a score, clamping into [0, 1]. Non-finite input fails open.
    pub fn new(score: f64) -> Self {
        if !score.is_finite() {
            return Self::VISIBLE;
        }
        Visibility(score.clamp(0.0, 1.0))
    }

    /// Map a single approve/reject decision directly to a score.
    pub fn from_approval(approved: bool) -> Self {
        if approved {
            Self::VISIBLE
        } else {
            Self::HIDDEN
        }
    }

    /// The raw score.
    pub fn score(&self) -> f64 {
        self.0
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::VISIBLE
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

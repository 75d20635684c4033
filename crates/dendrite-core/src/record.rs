// crates/dendrite-core/src/record.rs
//
// Flat rating records, as written by the rating submission flow.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// A single moderator decision on a content variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    /// The moderator who submitted the rating.
    pub moderator_id: String,
    /// The variant (item) that was rated.
    pub variant_id: String,
    /// `true` to show the variant, `false` to hide it.
    pub is_approved: bool,
    /// When the rating was recorded, as an ISO 8601 timestamp.
    pub rated_at: String,
}

impl RatingRecord {
    pub fn new(
        moderator_id: impl Into<String>,
        variant_id: impl Into<String>,
        is_approved: bool,
        rated_at: impl Into<String>,
    ) -> Self {
        Self {
            moderator_id: moderator_id.into(),
            variant_id: variant_id.into(),
            is_approved,
            rated_at: rated_at.into(),
        }
    }

    /// Parse `rated_at`, returning `None` when it is not a valid timestamp.
    pub fn rated_at_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.rated_at)
    }
}

/// Local date-time layouts accepted without an offset, tried in order.
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an ISO 8601 / RFC 3339 timestamp string.
///
/// Date-times without an offset and bare dates are read as UTC, a bare
/// date at midnight.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp);
    }

    let utc = FixedOffset::east_opt(0)?;
    let naive = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    Some(utc.from_utc_datetime(&naive))
}

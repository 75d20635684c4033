// crates/dendrite-visibility/src/counts.rs
//
// Per-moderator rating counts over stored rating records.

use std::collections::HashMap;

use dendrite_core::RatingRecord;
use serde::Serialize;
use serde_json::Value;

/// How many valid ratings a moderator has submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeratorRatingCount {
    pub moderator_id: String,
    pub count: usize,
}

/// Decode the schema-compliant entries of a JSON array of rating records.
///
/// An entry is kept only when it is an object carrying a boolean `isApproved`, string
/// `moderatorId` and `variantId`, and a `ratedAt` that parses as a
/// timestamp. Anything that is not an array yields no records.
pub fn valid_records(records: &Value) -> Vec<RatingRecord> {
    let Some(entries) = records.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|entry| entry.is_object())
        .filter_map(|entry| serde_json::from_value::<RatingRecord>(entry.clone()).ok())
        .filter(|record| record.rated_at_timestamp().is_some())
        .collect()
}

/// Count valid ratings per moderator, in order of first appearance.
pub fn moderator_rating_counts(records: &Value) -> Vec<ModeratorRatingCount> {
    let mut counts: Vec<ModeratorRatingCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in valid_records(records) {
        match index.get(&record.moderator_id) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(record.moderator_id.clone(), counts.len());
                counts.push(ModeratorRatingCount {
                    moderator_id: record.moderator_id,
                    count: 1,
                });
            }
        }
    }

    counts
}

/// JSON-in, JSON-out form of [`moderator_rating_counts`].
///
/// Malformed input is treated as an empty list.
pub fn moderator_rating_counts_json(input: &str) -> String {
    let parsed: Value = serde_json::from_str(input).unwrap_or(Value::Null);
    serde_json::to_string(&moderator_rating_counts(&parsed)).unwrap_or_else(|_| "[]".to_string())
}

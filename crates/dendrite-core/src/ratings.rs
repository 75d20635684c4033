// crates/dendrite-core/src/ratings.rs
//
// The ratings table: moderator id -> (item id -> approved).
//
// This is the only input that drives both the implicit trust graph and the
// consensus vote. Absence of an entry means "no rating", which is distinct
// from a recorded `false`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::RatingRecord;

/// One moderator's decisions, keyed by item id.
pub type ModeratorRatings = IndexMap<String, bool>;

/// Approve/reject decisions for every known moderator.
///
/// Moderators and items keep the order they were first inserted in, which is
/// the key order of the JSON they were decoded from. Node enumeration and the
/// rater sum follow that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingsTable {
    entries: IndexMap<String, ModeratorRatings>,
}

impl RatingsTable {
    /// Create a new empty ratings table.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Record `moderator`'s decision on `item`, replacing any earlier one.
    pub fn insert(&mut self, moderator: impl Into<String>, item: impl Into<String>, approved: bool) {
        self.entries
            .entry(moderator.into())
            .or_default()
            .insert(item.into(), approved);
    }

    /// Make sure `moderator` has an entry, even if it holds no ratings.
    ///
    /// Moderators with an empty entry still appear as graph nodes.
    pub fn ensure_moderator(&mut self, moderator: &str) {
        if !self.entries.contains_key(moderator) {
            self.entries.insert(moderator.to_string(), ModeratorRatings::new());
        }
    }

    /// All ratings recorded by `moderator`, if the moderator has an entry.
    pub fn moderator_ratings(&self, moderator: &str) -> Option<&ModeratorRatings> {
        self.entries.get(moderator)
    }

    /// `moderator`'s decision on `item`, or `None` when no rating exists.
    pub fn rating(&self, moderator: &str, item: &str) -> Option<bool> {
        self.entries
            .get(moderator)
            .and_then(|ratings| ratings.get(item))
            .copied()
    }

    /// Whether `moderator` has an entry (possibly empty) in the table.
    pub fn contains_moderator(&self, moderator: &str) -> bool {
        self.entries.contains_key(moderator)
    }

    /// Iterate moderator ids in table order.
    pub fn moderators(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate `(moderator, ratings)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModeratorRatings)> {
        self.entries.iter().map(|(id, ratings)| (id.as_str(), ratings))
    }

    /// Number of moderators with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no moderators at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded ratings across all moderators.
    pub fn rating_count(&self) -> usize {
        self.entries.values().map(IndexMap::len).sum()
    }

    /// Coerce an arbitrary JSON value into a ratings table.
    ///
    /// Anything that is not an object yields an empty table. A moderator whose
    /// value is not an object keeps an empty entry, and item values that are
    /// not booleans are dropped.
    pub fn from_json_value(value: &Value) -> Self {
        let mut table = Self::new();
        let Some(moderators) = value.as_object() else {
            return table;
        };

        for (moderator, raw) in moderators {
            let ratings: ModeratorRatings = raw
                .as_object()
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|(item, v)| v.as_bool().map(|b| (item.clone(), b)))
                        .collect()
                })
                .unwrap_or_default();
            table.entries.insert(moderator.clone(), ratings);
        }

        table
    }

    /// Build a table from flat rating records.
    ///
    /// Later records for the same moderator and item overwrite earlier ones.
    pub fn from_records(records: &[RatingRecord]) -> Self {
        let mut table = Self::new();
        for record in records {
            table.insert(
                record.moderator_id.clone(),
                record.variant_id.clone(),
                record.is_approved,
            );
        }
        table
    }
}

// crates/dendrite-visibility/src/request.rs
//
// Visibility request and its JSON envelope.
//
// The envelope is `{ "itemId": ..., "adminId": ..., "ratings": { ... } }`.
// Older callers send the item as `pageId` or `variantId`; both are accepted.

use dendrite_core::{is_valid_id, DendriteError, RatingsTable, DEFAULT_VISIBILITY};
use serde::Deserialize;
use serde_json::Value;

use crate::resolver::calculate_visibility;

/// Everything the resolver needs to score one item.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityRequest {
    /// The content variant being evaluated.
    pub item_id: String,
    /// The moderator whose judgment is authoritative.
    pub admin_id: String,
    /// Every moderator's ratings.
    pub ratings: RatingsTable,
}

/// Envelope as received; fields are validated after decoding.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope {
    #[serde(default, alias = "pageId", alias = "variantId")]
    item_id: Value,
    #[serde(default)]
    admin_id: Value,
    #[serde(default)]
    ratings: Value,
}

impl VisibilityRequest {
    pub fn new(item_id: impl Into<String>, admin_id: impl Into<String>, ratings: RatingsTable) -> Self {
        Self {
            item_id: item_id.into(),
            admin_id: admin_id.into(),
            ratings,
        }
    }

    /// Decode a JSON envelope.
    ///
    /// Fails when the input is not a JSON object or either id is missing,
    /// empty, or not a string. The ratings are normalized, never rejected.
    pub fn from_json(input: &str) -> Result<Self, DendriteError> {
        let value: Value = serde_json::from_str(input)?;
        if !value.is_object() {
            return Err(DendriteError::InvalidInput(
                "envelope must be a JSON object".to_string(),
            ));
        }
        let raw: RawEnvelope = serde_json::from_value(value)?;
        let item_id = required_id(&raw.item_id, "itemId")?;
        let admin_id = required_id(&raw.admin_id, "adminId")?;

        Ok(Self {
            item_id,
            admin_id,
            ratings: RatingsTable::from_json_value(&raw.ratings),
        })
    }
}

fn required_id(value: &Value, field: &str) -> Result<String, DendriteError> {
    match value.as_str() {
        Some(id) if is_valid_id(id) => Ok(id.to_string()),
        _ => Err(DendriteError::InvalidInput(format!(
            "{} must be a non-empty string",
            field
        ))),
    }
}

/// Score a JSON envelope, failing open to `"1"` on any decoding problem.
pub fn calculate_visibility_json(input: &str) -> String {
    match VisibilityRequest::from_json(input) {
        Ok(request) => calculate_visibility(&request),
        Err(e) => {
            tracing::debug!("Unusable visibility request, defaulting to visible: {}", e);
            DEFAULT_VISIBILITY.to_string()
        }
    }
}

//! Listing payloads and their distance-annotated form.

use crate::numeric::to_number;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A product or offer as delivered by the backend.
///
/// Only the fields the proximity pipeline reads are typed; everything
/// else is kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Listing id, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Denormalized seller shop, when the backend embeds it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop: Option<Value>,
    /// Seller id used for the deferred user lookup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Value>,
    /// Distance pre-computed by the backend, if any
    #[serde(default, deserialize_with = "loose_number", skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Listing-level address, used after the shop and seller addresses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Value>,
    /// Either a plain address string or a location entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Listing {
    /// The seller id to look up, if the listing carries one.
    ///
    /// Accepts a string, a number, or a populated user object with `_id`/`id`.
    pub fn seller_id(&self) -> Option<String> {
        seller_id_from(self.user_id.as_ref()?)
    }
}

fn seller_id_from(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(fields) => ["_id", "id"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(seller_id_from)),
        _ => None,
    }
}

fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(to_number))
}

/// A listing with its resolved seller distance.
///
/// `distanceKm` is always written, as `null` when unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub distance_km: Option<f64>,
    pub distance_label: String,
}

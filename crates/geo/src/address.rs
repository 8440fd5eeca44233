//! Best-effort address resolution.

use crate::extract::MAX_NESTING_DEPTH;
use serde_json::Value;

/// Address parts joined in this order when no single address field exists.
const PART_KEYS: [&str; 5] = ["address1", "address2", "city", "state", "country"];

/// Postal code aliases; the first present one is used.
const POSTAL_KEYS: [&str; 3] = ["zipCode", "postalCode", "zip"];

/// Recovers a human-readable address from an arbitrary entity.
///
/// Priority: `address` string, `lastKnownLocation.address`,
/// `deliveryAddress` (string or nested entity), composed parts
/// (`address1, address2, city, state, country, zip`), then each of
/// `addresses`.
///
/// # Example
/// ```
/// use marketplace_geo::extract_address;
/// use serde_json::json;
///
/// let user = json!({"address1": "221B", "city": "London"});
/// assert_eq!(extract_address(&user).as_deref(), Some("221B, London"));
/// ```
pub fn extract_address(entity: &Value) -> Option<String> {
    extract_at_depth(entity, 0)
}

fn extract_at_depth(entity: &Value, depth: usize) -> Option<String> {
    if depth > MAX_NESTING_DEPTH {
        return None;
    }
    let fields = entity.as_object()?;

    if let Some(address) = fields.get("address").and_then(non_empty_str) {
        return Some(address.to_string());
    }

    if let Some(address) = fields
        .get("lastKnownLocation")
        .and_then(|loc| loc.get("address"))
        .and_then(non_empty_str)
    {
        return Some(address.to_string());
    }

    if let Some(delivery) = fields.get("deliveryAddress") {
        let resolved = match delivery {
            Value::String(_) => non_empty_str(delivery).map(str::to_string),
            Value::Object(_) => extract_at_depth(delivery, depth + 1),
            _ => None,
        };
        if resolved.is_some() {
            return resolved;
        }
    }

    let postal = POSTAL_KEYS
        .iter()
        .filter_map(|key| fields.get(*key))
        .find_map(address_part);
    let parts: Vec<String> = PART_KEYS
        .iter()
        .filter_map(|key| fields.get(*key))
        .filter_map(address_part)
        .chain(postal)
        .collect();
    if !parts.is_empty() {
        return Some(parts.join(", "));
    }

    fields
        .get("addresses")
        .and_then(Value::as_array)?
        .iter()
        .find_map(|entry| extract_at_depth(entry, depth + 1))
}

/// Returns the trimmed string if the value is a non-blank string.
pub(crate) fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

/// Renders one component of a composed address. Numeric zips are allowed.
fn address_part(value: &Value) -> Option<String> {
    match value {
        Value::String(_) => non_empty_str(value).map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

//! WASM bindings for the geo crate.
//!
//! These bindings let the JS marketplace client call the same proximity
//! logic the Rust tooling uses. Entities and listings cross the boundary
//! as JSON strings.

use crate::{
    annotate_listings, calculate_distance_km, extract_address, extract_coordinates, filter_by_max_distance,
    format_distance_km, parse_listings, sort_by_distance, Coordinate,
};
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

fn parse_entity(entity_json: &str) -> Result<Value, JsValue> {
    serde_json::from_str(entity_json).map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))
}

/// Distance in km between two points, or `undefined` when unknown.
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Option<f64> {
    calculate_distance_km(&json!(lat1), &json!(lng1), &json!(lat2), &json!(lng2))
}

/// Extract coordinates from an entity.
///
/// # Returns
/// JSON string with latitude/longitude, or `"null"`
#[wasm_bindgen]
pub fn extract_coordinates_json(entity_json: &str) -> Result<String, JsValue> {
    let entity = parse_entity(entity_json)?;
    let result = extract_coordinates(&entity).map_or(Value::Null, |coord| {
        json!({"latitude": coord.latitude, "longitude": coord.longitude})
    });
    Ok(result.to_string())
}

/// Extract a display address from an entity, or `undefined`.
#[wasm_bindgen]
pub fn extract_address_json(entity_json: &str) -> Result<Option<String>, JsValue> {
    let entity = parse_entity(entity_json)?;
    Ok(extract_address(&entity))
}

/// Format a distance for display, or `undefined` for unknown distances.
#[wasm_bindgen]
pub fn format_distance(distance_km: Option<f64>) -> Option<String> {
    format_distance_km(distance_km)
}

/// Annotate listings with distances, then filter and optionally sort them.
///
/// # Arguments
/// * `buyer_lat` / `buyer_lng` - Buyer position; pass NaN when unknown
/// * `listings_json` - JSON array of listings
/// * `max_distance_km` - Maximum distance; 0 or negative disables the filter
/// * `sort` - Sort nearest first, unknown distances last
///
/// # Returns
/// JSON array of annotated listings
#[wasm_bindgen]
pub fn annotate_listings_json(
    buyer_lat: f64,
    buyer_lng: f64,
    listings_json: &str,
    max_distance_km: f64,
    sort: bool,
) -> Result<String, JsValue> {
    let listings = parse_listings(listings_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let buyer = Coordinate::checked(buyer_lat, buyer_lng);

    let mut results = filter_by_max_distance(annotate_listings(buyer.as_ref(), listings), Some(max_distance_km));
    if sort {
        sort_by_distance(&mut results);
    }

    serde_json::to_string(&results).map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

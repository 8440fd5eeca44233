//! Coordinate extraction from heterogeneous entities.
//!
//! Listings, shops and user records arrive from different backends with
//! different location shapes. Supported, in priority order:
//! - flat `latitude`/`longitude`
//! - flat `lat`/`lon` or `lat`/`lng`
//! - GeoJSON-style `location.coordinates` as `[lng, lat]`
//! - `location.coordinate` (same order)
//! - nested `lastKnownLocation`, then nested `address`
//! - each entry of `addresses`, first match wins

use crate::Coordinate;
use serde_json::Value;

/// Maximum nesting depth followed through `lastKnownLocation`, `address`
/// and `addresses` before giving up.
pub const MAX_NESTING_DEPTH: usize = 8;

const FLAT_PAIRS: [(&str, &str); 3] = [("latitude", "longitude"), ("lat", "lon"), ("lat", "lng")];

const POINT_KEYS: [&str; 2] = ["coordinates", "coordinate"];

/// Recovers a coordinate from an arbitrary entity.
///
/// Returns `None` for non-objects and for entities with no valid
/// coordinate in any of the known shapes.
///
/// # Example
/// ```
/// use marketplace_geo::{extract_coordinates, Coordinate};
/// use serde_json::json;
///
/// let shop = json!({"location": {"coordinates": [10, 20]}});
/// assert_eq!(extract_coordinates(&shop), Some(Coordinate::new(20.0, 10.0)));
///
/// let user = json!({"lat": "40.0", "lng": "-73.9"});
/// assert_eq!(extract_coordinates(&user), Some(Coordinate::new(40.0, -73.9)));
/// ```
pub fn extract_coordinates(entity: &Value) -> Option<Coordinate> {
    extract_at_depth(entity, 0)
}

fn extract_at_depth(entity: &Value, depth: usize) -> Option<Coordinate> {
    if depth > MAX_NESTING_DEPTH {
        return None;
    }
    let fields = entity.as_object()?;

    for (lat_key, lon_key) in FLAT_PAIRS {
        if let (Some(lat), Some(lon)) = (fields.get(lat_key), fields.get(lon_key)) {
            if let Some(coord) = Coordinate::from_values(lat, lon) {
                return Some(coord);
            }
        }
    }

    if let Some(location) = fields.get("location") {
        for key in POINT_KEYS {
            if let Some(coord) = location.get(key).and_then(point_to_coordinate) {
                return Some(coord);
            }
        }
    }

    for key in ["lastKnownLocation", "address"] {
        if let Some(coord) = fields.get(key).and_then(|nested| extract_at_depth(nested, depth + 1)) {
            return Some(coord);
        }
    }

    fields
        .get("addresses")
        .and_then(Value::as_array)?
        .iter()
        .find_map(|entry| extract_at_depth(entry, depth + 1))
}

/// Reads a GeoJSON-ordered `[lng, lat, ...]` array.
fn point_to_coordinate(point: &Value) -> Option<Coordinate> {
    match point.as_array()?.as_slice() {
        [lng, lat, ..] => Coordinate::from_values(lat, lng),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_non_object_is_none() {
        assert!(extract_coordinates(&json!(null)).is_none());
        assert!(extract_coordinates(&json!("12.9,77.6")).is_none());
        assert!(extract_coordinates(&json!([77.6, 12.9])).is_none());
    }

    #[test]
    fn test_flat_latitude_longitude() {
        let entity = json!({"latitude": 12.9716, "longitude": 77.5946});
        assert_eq!(extract_coordinates(&entity), Some(Coordinate::new(12.9716, 77.5946)));
    }

    #[test]
    fn test_lat_lon_and_lat_lng() {
        let lon = json!({"lat": 51.5, "lon": -0.12});
        assert_eq!(extract_coordinates(&lon), Some(Coordinate::new(51.5, -0.12)));

        let lng = json!({"lat": "40.0", "lng": "-73.9"});
        assert_eq!(extract_coordinates(&lng), Some(Coordinate::new(40.0, -73.9)));
    }

    #[test]
    fn test_geojson_order() {
        let entity = json!({"location": {"type": "Point", "coordinates": [10, 20]}});
        assert_eq!(extract_coordinates(&entity), Some(Coordinate::new(20.0, 10.0)));
    }

    #[test]
    fn test_singular_coordinate_key() {
        let entity = json!({"location": {"coordinate": [72.8777, 19.0760]}});
        assert_eq!(extract_coordinates(&entity), Some(Coordinate::new(19.0760, 72.8777)));
    }

    #[test]
    fn test_short_coordinates_array_is_skipped() {
        let entity = json!({"location": {"coordinates": [10]}});
        assert!(extract_coordinates(&entity).is_none());
    }

    #[test]
    fn test_invalid_flat_pair_falls_through() {
        let entity = json!({
            "latitude": 120.0,
            "longitude": 10.0,
            "lat": 45.0,
            "lng": 9.0
        });
        assert_eq!(extract_coordinates(&entity), Some(Coordinate::new(45.0, 9.0)));
    }

    #[test]
    fn test_flat_fields_win_over_nested() {
        let entity = json!({
            "latitude": 1.0,
            "longitude": 2.0,
            "location": {"coordinates": [30.0, 40.0]}
        });
        assert_eq!(extract_coordinates(&entity), Some(Coordinate::new(1.0, 2.0)));
    }

    #[test]
    fn test_last_known_location_before_address() {
        let entity = json!({
            "lastKnownLocation": {"latitude": 10.0, "longitude": 11.0},
            "address": {"latitude": 20.0, "longitude": 21.0}
        });
        assert_eq!(extract_coordinates(&entity), Some(Coordinate::new(10.0, 11.0)));
    }

    #[test]
    fn test_nested_address() {
        let entity = json!({"address": {"location": {"coordinates": [77.6, 12.9]}}});
        assert_eq!(extract_coordinates(&entity), Some(Coordinate::new(12.9, 77.6)));
    }

    #[test]
    fn test_addresses_first_valid_wins() {
        let entity = json!({
            "addresses": [
                {"city": "Pune"},
                {"lat": 18.52, "lng": 73.85},
                {"lat": 19.07, "lng": 72.87}
            ]
        });
        assert_eq!(extract_coordinates(&entity), Some(Coordinate::new(18.52, 73.85)));
    }

    #[test]
    fn test_depth_cap() {
        let mut entity = json!({"latitude": 1.0, "longitude": 1.0});
        for _ in 0..=MAX_NESTING_DEPTH {
            entity = json!({ "address": entity });
        }
        assert!(extract_coordinates(&entity).is_none());

        let mut shallow = json!({"latitude": 1.0, "longitude": 1.0});
        for _ in 0..MAX_NESTING_DEPTH {
            shallow = json!({ "address": shallow });
        }
        assert!(extract_coordinates(&shallow).is_some());
    }

    proptest! {
        #[test]
        fn extracted_coordinates_are_in_range(lat in -500.0f64..500.0, lon in -500.0f64..500.0) {
            let entity = json!({"latitude": lat, "longitude": lon});
            if let Some(coord) = extract_coordinates(&entity) {
                prop_assert!((-90.0..=90.0).contains(&coord.latitude));
                prop_assert!((-180.0..=180.0).contains(&coord.longitude));
            } else {
                prop_assert!(!((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)));
            }
        }
    }
}

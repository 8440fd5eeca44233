//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::{to_number, Coordinate};
use serde_json::Value;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// The result is not rounded. See [`distance_between`] for the display value.
///
/// # Example
/// ```
/// use marketplace_geo::{haversine_distance, Coordinate};
///
/// let delhi = Coordinate::new(28.6139, 77.2090);
/// let mumbai = Coordinate::new(19.0760, 72.8777);
///
/// let distance = haversine_distance(&delhi, &mumbai);
/// assert!((distance - 1148.0).abs() < 5.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Calculates the great-circle distance between two coordinates in meters.
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_M)
}

#[inline]
fn haversine_distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

/// Distance in kilometers rounded to 2 decimals, or `None` if it is not finite.
///
/// The coordinates are not range-checked here; out-of-range input still
/// yields a number, matching what screens get when they pass raw values.
#[inline]
pub fn distance_between(from: &Coordinate, to: &Coordinate) -> Option<f64> {
    let km = haversine_distance(from, to);
    if !km.is_finite() {
        return None;
    }
    let rounded = (km * 100.0).round() / 100.0;
    rounded.is_finite().then_some(rounded)
}

/// Distance in kilometers between two loosely typed coordinate pairs.
///
/// Each argument may be a JSON number or numeric string. Any value that
/// does not coerce to a finite number yields `None`, which callers must
/// keep distinct from a zero distance.
///
/// # Example
/// ```
/// use marketplace_geo::calculate_distance_km;
/// use serde_json::json;
///
/// assert_eq!(calculate_distance_km(&json!(12.9), &json!(77.6), &json!("12.9"), &json!("77.6")), Some(0.0));
/// assert_eq!(calculate_distance_km(&json!(null), &json!(10), &json!(20), &json!(30)), None);
/// ```
pub fn calculate_distance_km(lat1: &Value, lon1: &Value, lat2: &Value, lon2: &Value) -> Option<f64> {
    let from = Coordinate::new(to_number(lat1)?, to_number(lon1)?);
    let to = Coordinate::new(to_number(lat2)?, to_number(lon2)?);
    distance_between(&from, &to)
}

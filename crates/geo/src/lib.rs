//! Geo-proximity utilities for the marketplace client.
//!
//! This crate provides:
//! - Coordinate extraction from loosely shaped listing, shop and user JSON
//! - Best-effort address resolution with prioritized fallbacks
//! - Haversine distance calculations rounded for display
//! - Distance labels and max-distance filtering for listings
//! - Batch annotation with optional parallelism
//! - WASM bindings for the JS client
//!
//! Missing or malformed location data is never an error here: every
//! function collapses it to `None` and lets the caller render a fallback.
//!
//! # Example
//!
//! ```
//! use marketplace_geo::{calculate_distance_km, extract_coordinates, format_distance_km};
//! use serde_json::json;
//!
//! let shop = json!({"location": {"type": "Point", "coordinates": [72.8777, 19.0760]}});
//! let seller = extract_coordinates(&shop).unwrap();
//!
//! let km = calculate_distance_km(&json!(28.6139), &json!(77.2090), &json!(seller.latitude), &json!(seller.longitude));
//! assert!((km.unwrap() - 1148.0).abs() < 5.0);
//! assert_eq!(format_distance_km(Some(3.24)).as_deref(), Some("3.2 km"));
//! ```

mod address;
pub mod batch;
mod error;
mod extract;
mod filter;
mod format;
mod haversine;
mod listing;
mod numeric;
mod seller;

#[cfg(feature = "wasm")]
mod wasm;

pub use address::extract_address;
pub use batch::{annotate_listing, annotate_listings};
pub use error::{parse_listings, GeoError, GeoErrorCode, Result};
pub use extract::{extract_coordinates, MAX_NESTING_DEPTH};
pub use filter::{filter_by_max_distance, passes_distance_filter, sort_by_distance};
pub use format::{
    address_label, distance_label, format_distance_km, LOCATION_UNAVAILABLE, UNKNOWN_DISTANCE,
};
pub use haversine::{
    calculate_distance_km, distance_between, haversine_distance, haversine_distance_meters,
    EARTH_RADIUS_KM, EARTH_RADIUS_M,
};
pub use listing::{AnnotatedListing, Listing};
pub use numeric::to_number;
pub use seller::{get_seller_address, get_seller_coordinates};

use serde_json::Value;

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// No range check happens here; use [`Coordinate::checked`] for
    /// untrusted values.
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate only if both values are finite and in range.
    #[inline]
    pub fn checked(latitude: f64, longitude: f64) -> Option<Self> {
        let coord = Self::new(latitude, longitude);
        coord.is_valid().then_some(coord)
    }

    /// Coerces a loosely typed latitude/longitude pair into a coordinate.
    ///
    /// Either side may be a JSON number or a numeric string.
    pub fn from_values(latitude: &Value, longitude: &Value) -> Option<Self> {
        Self::checked(to_number(latitude)?, to_number(longitude)?)
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

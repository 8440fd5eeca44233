//! Display formatting for distances and addresses.
//!
//! Rounding is half away from zero on the decimal-scaled value, so
//! `42.5` renders as `"43 km"` and `9.96` as `"10.0 km"`. The one-decimal
//! threshold is checked on the unrounded input.

/// Label shown when a listing's distance is unknown.
pub const UNKNOWN_DISTANCE: &str = "N/A";

/// Label shown when no address can be resolved.
pub const LOCATION_UNAVAILABLE: &str = "Location not available";

/// Formats a distance for display: one decimal below 10 km, none above.
///
/// # Example
/// ```
/// use marketplace_geo::format_distance_km;
///
/// assert_eq!(format_distance_km(Some(3.24)).as_deref(), Some("3.2 km"));
/// assert_eq!(format_distance_km(Some(10.4)).as_deref(), Some("10 km"));
/// assert_eq!(format_distance_km(None), None);
/// ```
pub fn format_distance_km(distance: Option<f64>) -> Option<String> {
    let km = distance.filter(|d| d.is_finite())?;

    if km < 10.0 {
        Some(format!("{:.1} km", (km * 10.0).round() / 10.0))
    } else {
        Some(format!("{:.0} km", km.round()))
    }
}

/// Badge text for a listing: `"3.2 km away"`, or `"N/A"` when unknown.
pub fn distance_label(distance: Option<f64>) -> String {
    format_distance_km(distance).map_or_else(|| UNKNOWN_DISTANCE.to_string(), |d| format!("{d} away"))
}

/// Address text for a listing, or `"Location not available"`.
pub fn address_label(address: Option<&str>) -> String {
    address.unwrap_or(LOCATION_UNAVAILABLE).to_string()
}

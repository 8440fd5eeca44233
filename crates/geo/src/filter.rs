//! Max-distance filtering and proximity ordering.
//!
//! Unknown distances never fail the filter: a listing with incomplete
//! location data stays visible rather than being treated as far away.

use crate::AnnotatedListing;
use std::cmp::Ordering;

/// Returns true if a listing at `distance_km` should be kept.
///
/// A missing, non-finite or non-positive `max_distance_km` disables the
/// filter. Otherwise only a known distance greater than the maximum fails.
pub fn passes_distance_filter(distance_km: Option<f64>, max_distance_km: Option<f64>) -> bool {
    let Some(max) = max_distance_km.filter(|m| m.is_finite() && *m > 0.0) else {
        return true;
    };

    match distance_km {
        Some(d) if d.is_finite() => d <= max,
        _ => true,
    }
}

/// Drops listings farther than `max_distance_km`, keeping input order.
pub fn filter_by_max_distance(
    listings: Vec<AnnotatedListing>,
    max_distance_km: Option<f64>,
) -> Vec<AnnotatedListing> {
    listings
        .into_iter()
        .filter(|l| passes_distance_filter(l.distance_km, max_distance_km))
        .collect()
}

/// Sorts nearest first; unknown distances go last. Stable for ties.
pub fn sort_by_distance(listings: &mut [AnnotatedListing]) {
    listings.sort_by(|a, b| compare_distance(a.distance_km, b.distance_km));
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.filter(|d| d.is_finite());
    let b = b.filter(|d| d.is_finite());
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

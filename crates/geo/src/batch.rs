//! Distance annotation for single listings and batches.
//!
//! The batch form uses only data embedded in each listing. Seller user
//! lookups are async and live in the API client's proximity resolver,
//! which calls [`annotate_listing`] once a seller record is in hand.

use crate::{distance_between, distance_label, get_seller_coordinates, AnnotatedListing, Coordinate, Listing};
use serde_json::Value;

/// Annotates one listing with its distance from the buyer.
///
/// When either end has no coordinate, the backend's pre-computed
/// `distanceKm` is used if present. The listing's own `distance_km` is
/// moved into the annotation and any stale `distanceLabel` is dropped, so
/// annotated output can be annotated again.
///
/// # Example
/// ```
/// use marketplace_geo::{annotate_listing, Coordinate, Listing};
/// use serde_json::json;
///
/// let listing: Listing = serde_json::from_value(json!({
///     "shop": {"latitude": 12.9352, "longitude": 77.6245}
/// })).unwrap();
///
/// let buyer = Coordinate::new(12.9716, 77.5946);
/// let annotated = annotate_listing(Some(&buyer), listing, None);
/// assert_eq!(annotated.distance_label, "5.2 km away");
/// ```
pub fn annotate_listing(
    buyer: Option<&Coordinate>,
    mut listing: Listing,
    seller: Option<&Value>,
) -> AnnotatedListing {
    let precomputed = listing.distance_km.take().filter(|d| d.is_finite());
    // A label from an earlier annotation would be written twice
    listing.extra.remove("distanceLabel");

    let computed = buyer.and_then(|buyer| {
        get_seller_coordinates(&listing, seller).and_then(|shop| distance_between(buyer, &shop))
    });

    let distance_km = computed.or(precomputed);

    AnnotatedListing {
        distance_label: distance_label(distance_km),
        distance_km,
        listing,
    }
}

/// Annotates every listing from embedded data, preserving input order.
///
/// # Example
/// ```
/// use marketplace_geo::{annotate_listings, Coordinate, Listing};
/// use serde_json::json;
///
/// let listings: Vec<Listing> = serde_json::from_value(json!([
///     {"id": 1, "shop": {"lat": 19.0760, "lng": 72.8777}},
///     {"id": 2, "location": "Somewhere"}
/// ])).unwrap();
///
/// let results = annotate_listings(Some(&Coordinate::new(28.6139, 77.2090)), listings);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[1].distance_km, None);
/// ```
pub fn annotate_listings(buyer: Option<&Coordinate>, listings: Vec<Listing>) -> Vec<AnnotatedListing> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        listings
            .into_par_iter()
            .map(|listing| annotate_listing(buyer, listing, None))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        listings
            .into_iter()
            .map(|listing| annotate_listing(buyer, listing, None))
            .collect()
    }
}

//! Seller location and address resolution for a listing.

use crate::address::{extract_address, non_empty_str};
use crate::{extract_coordinates, Coordinate, Listing};
use serde_json::Value;

/// Resolves the seller's coordinate for a listing.
///
/// Order: the embedded `shop`, then the looked-up seller user, then the
/// listing's own `location`.
pub fn get_seller_coordinates(listing: &Listing, seller: Option<&Value>) -> Option<Coordinate> {
    listing
        .shop
        .as_ref()
        .and_then(extract_coordinates)
        .or_else(|| seller.and_then(extract_coordinates))
        .or_else(|| listing.location.as_ref().and_then(extract_coordinates))
}

/// Resolves the seller's display address for a listing.
///
/// Order: `shop.address` as written, the seller user's address, the
/// shop's composed address, the listing's `address`, then `location`
/// when it is a plain string.
pub fn get_seller_address(listing: &Listing, seller: Option<&Value>) -> Option<String> {
    let shop = listing.shop.as_ref();

    shop.and_then(|s| s.get("address"))
        .and_then(non_empty_str)
        .map(str::to_string)
        .or_else(|| seller.and_then(extract_address))
        .or_else(|| shop.and_then(extract_address))
        .or_else(|| listing.address.as_ref().and_then(non_empty_str).map(str::to_string))
        .or_else(|| listing.location.as_ref().and_then(non_empty_str).map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing(value: Value) -> Listing {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_shop_coordinates_win() {
        let item = listing(json!({
            "shop": {"latitude": 12.9, "longitude": 77.6},
            "location": {"coordinates": [72.8, 19.0]}
        }));
        let seller = json!({"lat": 28.6, "lng": 77.2});

        assert_eq!(get_seller_coordinates(&item, Some(&seller)), Some(Coordinate::new(12.9, 77.6)));
    }

    #[test]
    fn test_seller_user_before_listing_location() {
        let item = listing(json!({
            "shop": {"name": "No coords"},
            "location": {"coordinates": [72.8, 19.0]}
        }));
        let seller = json!({"lastKnownLocation": {"lat": 28.6, "lng": 77.2}});

        assert_eq!(get_seller_coordinates(&item, Some(&seller)), Some(Coordinate::new(28.6, 77.2)));
    }

    #[test]
    fn test_listing_location_fallback() {
        let item = listing(json!({"location": {"coordinates": [72.8, 19.0]}}));
        assert_eq!(get_seller_coordinates(&item, None), Some(Coordinate::new(19.0, 72.8)));
    }

    #[test]
    fn test_no_coordinates_anywhere() {
        let item = listing(json!({"location": "Andheri West"}));
        assert_eq!(get_seller_coordinates(&item, Some(&json!({"name": "Ravi"}))), None);
    }

    #[test]
    fn test_shop_address_direct() {
        let item = listing(json!({"shop": {"address": "Shop 4, Linking Rd", "city": "Mumbai"}}));
        let seller = json!({"address": "Seller home"});
        assert_eq!(get_seller_address(&item, Some(&seller)).as_deref(), Some("Shop 4, Linking Rd"));
    }

    #[test]
    fn test_seller_address_before_shop_parts() {
        let item = listing(json!({"shop": {"city": "Mumbai"}}));
        let seller = json!({"deliveryAddress": "Seller home"});
        assert_eq!(get_seller_address(&item, Some(&seller)).as_deref(), Some("Seller home"));
        assert_eq!(get_seller_address(&item, None).as_deref(), Some("Mumbai"));
    }

    #[test]
    fn test_listing_address_then_string_location() {
        let item = listing(json!({"address": "Baner Road", "location": "Pune"}));
        assert_eq!(get_seller_address(&item, None).as_deref(), Some("Baner Road"));

        let item = listing(json!({"location": " Pune "}));
        assert_eq!(get_seller_address(&item, None).as_deref(), Some("Pune"));

        let item = listing(json!({"location": {"coordinates": [73.8, 18.5]}}));
        assert_eq!(get_seller_address(&item, None), None);
    }
}

//! Integration tests for seller lookup and proximity resolution using wiremock HTTP mocks.

use marketplace_api_client::{ClientConfig, MarketplaceClient, ProximityResolver, SellerCache};
use marketplace_core::retry::RetryConfig;
use marketplace_geo::{Coordinate, Listing};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BENGALURU: Coordinate = Coordinate { latitude: 12.9716, longitude: 77.5946 };

fn test_client(base_url: &str) -> MarketplaceClient {
    let config = ClientConfig::development()
        .with_base_url(base_url)
        .with_auth_token("test-token")
        .with_retry(RetryConfig::no_retry());
    MarketplaceClient::with_config(config).expect("client construction should not fail")
}

fn koramangala_user() -> serde_json::Value {
    json!({
        "success": true,
        "user": {
            "_id": "u1",
            "lat": "12.9352",
            "lng": "77.6245",
            "address": "80 Feet Road, Koramangala"
        }
    })
}

#[tokio::test]
async fn user_info_hits_user_route_with_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/user-info/u1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(koramangala_user()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client.users().user_info("u1").await.expect("should parse user info");

    assert!(response.success);
    let user = response.into_user().expect("user present");
    assert_eq!(user["address"], "80 Feet Road, Koramangala");
}

#[tokio::test]
async fn seller_not_found_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/user-info/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let seller = client.users().seller("ghost").await.expect("404 is not an error");
    assert!(seller.is_none());
}

#[tokio::test]
async fn seller_unsuccessful_body_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/user-info/u2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client.users().seller("u2").await.unwrap().is_none());
}

#[tokio::test]
async fn server_error_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/user-info/u1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.users().seller("u1").await.unwrap_err();
    assert!(err.is_server_error());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn resolver_caches_seller_across_listings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/user-info/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(koramangala_user()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let cache = SellerCache::new();
    let resolver = ProximityResolver::new(client.users(), cache.clone());

    let first: Vec<Listing> = serde_json::from_value(json!([{"id": 1, "userId": "u1"}])).unwrap();
    let second: Vec<Listing> = serde_json::from_value(json!([{"id": 2, "userId": "u1"}])).unwrap();

    let a = resolver.annotate(Some(&BENGALURU), first).await;
    let b = resolver.annotate(Some(&BENGALURU), second).await;

    assert!(a[0].distance_km.is_some());
    assert_eq!(a[0].distance_km, b[0].distance_km);
    assert_eq!(a[0].distance_label, "5.2 km away");
    assert!(cache.contains("u1"));
}

#[tokio::test]
async fn failed_lookup_does_not_fail_batch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/user-info/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(koramangala_user()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/user-info/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resolver = ProximityResolver::new(client.users(), SellerCache::new());

    let listings: Vec<Listing> = serde_json::from_value(json!([
        {"id": 1, "userId": "broken"},
        {"id": 2, "userId": "u1"},
        {"id": 3, "shop": {"latitude": 12.2958, "longitude": 76.6394}}
    ]))
    .unwrap();

    let results = resolver.annotate_within(Some(&BENGALURU), listings, Some(50.0)).await;

    let ids: Vec<_> = results.iter().map(|r| r.listing.id.clone()).collect();
    assert_eq!(ids, vec![Some(json!(1)), Some(json!(2))]);
    assert_eq!(results[0].distance_km, None);
    assert_eq!(results[0].distance_label, "N/A");
    assert!(results[1].distance_km.is_some());
    assert!(!resolver.cache().contains("broken"));
}

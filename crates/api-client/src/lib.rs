//! Marketplace API client and async proximity resolution
//!
//! This crate provides a resilient HTTP client for the marketplace backend
//! and the async half of proximity annotation: listings without an embedded
//! shop location are resolved through a seller lookup, cached per seller id.
//!
//! # Features
//!
//! - **Environment-based configuration**: Load the API URL and token from environment variables
//! - **Retry with exponential backoff**: Automatic retry for transient failures
//! - **Circuit breaker**: Prevent cascading failures during outages
//! - **Request correlation**: Track requests with unique IDs for debugging
//! - **Seller cache**: Caller-owned, optionally bounded cache of seller records
//!
//! # Example
//!
//! ```rust,no_run
//! use marketplace_api_client::{MarketplaceClient, ProximityResolver, SellerCache};
//! use marketplace_geo::{Coordinate, Listing};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MarketplaceClient::new()?;
//!     let resolver = ProximityResolver::new(client.users(), SellerCache::new());
//!
//!     let listings: Vec<Listing> = serde_json::from_str(r#"[{"id": 1, "userId": "u1"}]"#)?;
//!     let buyer = Coordinate::new(12.9716, 77.5946);
//!
//!     for item in resolver.annotate_within(Some(&buyer), listings, Some(25.0)).await {
//!         println!("{:?}: {}", item.listing.id, item.distance_label);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod proximity;

pub use cache::SellerCache;
pub use client::MarketplaceClient;
pub use config::{ClientConfig, Environment};
pub use error::{ApiError, ApiResult};
pub use proximity::{ProximityResolver, SellerDirectory};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cache::SellerCache;
    pub use crate::client::MarketplaceClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::{UserInfoResponse, UsersApi};
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::proximity::{ProximityResolver, SellerDirectory};
}

//! Async proximity annotation with deferred seller lookup
//!
//! Listings that embed a `shop` with coordinates are annotated directly.
//! The rest carry a `userId`; the seller record is looked up once per id
//! (through [`SellerCache`]) and used as the coordinate source. A failed
//! lookup degrades that listing to "unknown distance" and never fails
//! the batch.

use crate::cache::SellerCache;
use crate::endpoints::UsersApi;
use crate::error::ApiResult;
use futures::future::join_all;
use marketplace_geo::{
    annotate_listing, extract_coordinates, filter_by_max_distance, get_seller_address,
    AnnotatedListing, Coordinate, Listing,
};
use serde_json::Value;
use tracing::{debug, warn};

/// Source of seller records keyed by seller/user id
#[allow(async_fn_in_trait)]
pub trait SellerDirectory {
    /// Fetch a seller record; `Ok(None)` means the seller does not exist
    async fn fetch_seller(&self, seller_id: &str) -> ApiResult<Option<Value>>;
}

impl SellerDirectory for UsersApi {
    async fn fetch_seller(&self, seller_id: &str) -> ApiResult<Option<Value>> {
        self.seller(seller_id).await
    }
}

/// Annotates listings with distances, looking up sellers as needed
pub struct ProximityResolver<D> {
    directory: D,
    cache: SellerCache,
}

impl<D: SellerDirectory> ProximityResolver<D> {
    /// Create a resolver over a seller directory and a caller-owned cache
    pub fn new(directory: D, cache: SellerCache) -> Self {
        Self { directory, cache }
    }

    /// The seller cache shared with this resolver
    pub fn cache(&self) -> &SellerCache {
        &self.cache
    }

    /// Resolve a seller record, consulting the cache first
    ///
    /// Lookup errors are logged and reported as `None`. Only found sellers
    /// are cached, so a transient failure is retried on the next call.
    pub async fn seller(&self, seller_id: &str) -> Option<Value> {
        if let Some(seller) = self.cache.get(seller_id) {
            debug!(seller_id, "Seller cache hit");
            return Some(seller);
        }

        debug!(seller_id, "Seller cache miss");
        match self.directory.fetch_seller(seller_id).await {
            Ok(Some(seller)) => {
                self.cache.insert(seller_id, seller.clone());
                Some(seller)
            }
            Ok(None) => {
                debug!(seller_id, "Seller not found");
                None
            }
            Err(e) => {
                warn!(seller_id, error = %e, "Seller lookup failed");
                None
            }
        }
    }

    /// Annotate a single listing, looking up its seller only when needed
    ///
    /// The lookup is skipped when there is no buyer coordinate, when the
    /// embedded shop already has coordinates, or when the listing has no
    /// seller id.
    pub async fn annotate_one(&self, buyer: Option<&Coordinate>, listing: Listing) -> AnnotatedListing {
        let seller = match Self::lookup_id(buyer, &listing) {
            Some(id) => self.seller(&id).await,
            None => None,
        };
        annotate_listing(buyer, listing, seller.as_ref())
    }

    /// Annotate listings concurrently, preserving input order
    pub async fn annotate(&self, buyer: Option<&Coordinate>, listings: Vec<Listing>) -> Vec<AnnotatedListing> {
        join_all(listings.into_iter().map(|listing| self.annotate_one(buyer, listing))).await
    }

    /// Annotate listings and drop those farther than `max_distance_km`
    pub async fn annotate_within(
        &self,
        buyer: Option<&Coordinate>,
        listings: Vec<Listing>,
        max_distance_km: Option<f64>,
    ) -> Vec<AnnotatedListing> {
        filter_by_max_distance(self.annotate(buyer, listings).await, max_distance_km)
    }

    /// Resolve the seller's display address
    ///
    /// An address written on the embedded shop wins outright; otherwise
    /// the seller is looked up before falling back to listing fields.
    pub async fn seller_address(&self, listing: &Listing) -> Option<String> {
        let shop_address = listing
            .shop
            .as_ref()
            .and_then(|shop| shop.get("address"))
            .and_then(Value::as_str)
            .is_some_and(|address| !address.trim().is_empty());

        let seller = match listing.seller_id() {
            Some(id) if !shop_address => self.seller(&id).await,
            _ => None,
        };
        get_seller_address(listing, seller.as_ref())
    }

    fn lookup_id(buyer: Option<&Coordinate>, listing: &Listing) -> Option<String> {
        buyer?;
        if listing.shop.as_ref().and_then(extract_coordinates).is_some() {
            return None;
        }
        listing.seller_id()
    }
}

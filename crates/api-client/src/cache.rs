//! In-memory seller cache
//!
//! Seller records are looked up by id and reused for the rest of the
//! session. The cache is owned by the caller and handed to the resolver,
//! so tests and screens can share, inspect or clear it. Unbounded by
//! default; with a capacity the oldest insertion is evicted first.

use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, PoisonError, RwLock};

/// Shared seller cache keyed by seller/user id
#[derive(Clone, Default)]
pub struct SellerCache {
    inner: Arc<RwLock<CacheInner>>,
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<String, Value>,
    order: VecDeque<String>,
    max_entries: Option<usize>,
}

impl SellerCache {
    /// Create an unbounded cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache holding at most `max_entries` sellers
    #[must_use]
    pub fn bounded(max_entries: usize) -> Self {
        Self::with_capacity(Some(max_entries))
    }

    /// Create a cache with an optional capacity
    #[must_use]
    pub fn with_capacity(max_entries: Option<usize>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CacheInner {
                max_entries: max_entries.map(|n| n.max(1)),
                ..CacheInner::default()
            })),
        }
    }

    /// Get a cached seller record
    #[must_use]
    pub fn get(&self, seller_id: &str) -> Option<Value> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.entries.get(seller_id).cloned()
    }

    /// Check whether a seller is cached
    #[must_use]
    pub fn contains(&self, seller_id: &str) -> bool {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.entries.contains_key(seller_id)
    }

    /// Cache a seller record, evicting the oldest entry when full
    pub fn insert(&self, seller_id: impl Into<String>, seller: Value) {
        let seller_id = seller_id.into();
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        if guard.entries.insert(seller_id.clone(), seller).is_none() {
            guard.order.push_back(seller_id);
        }

        while let Some(max) = guard.max_entries {
            if guard.entries.len() <= max {
                break;
            }
            let Some(oldest) = guard.order.pop_front() else {
                break;
            };
            guard.entries.remove(&oldest);
        }
    }

    /// Number of cached sellers
    #[must_use]
    pub fn len(&self) -> usize {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.entries.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached sellers
    pub fn clear(&self) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.entries.clear();
        guard.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_and_get() {
        let cache = SellerCache::new();
        assert!(cache.is_empty());

        cache.insert("u1", json!({"lat": 1.0, "lng": 2.0}));
        assert_eq!(cache.get("u1"), Some(json!({"lat": 1.0, "lng": 2.0})));
        assert!(cache.contains("u1"));
        assert!(cache.get("u2").is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = SellerCache::new();
        let handle = cache.clone();
        handle.insert("u1", json!({}));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_bounded_evicts_oldest() {
        let cache = SellerCache::bounded(2);
        cache.insert("u1", json!(1));
        cache.insert("u2", json!(2));
        cache.insert("u3", json!(3));

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains("u1"));
        assert!(cache.contains("u2"));
        assert!(cache.contains("u3"));
    }

    #[test]
    fn test_reinsert_does_not_duplicate_order() {
        let cache = SellerCache::bounded(2);
        cache.insert("u1", json!(1));
        cache.insert("u1", json!(10));
        cache.insert("u2", json!(2));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("u1"), Some(json!(10)));
    }

    #[test]
    fn test_clear() {
        let cache = SellerCache::new();
        cache.insert("u1", json!(1));
        cache.clear();
        assert!(cache.is_empty());
    }
}

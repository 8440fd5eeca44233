//! Configuration schema definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// `[proximity]` filtering and sorting defaults
    #[serde(default)]
    pub proximity: ProximityConfig,

    /// `[seller_cache]` lookup cache settings
    #[serde(default)]
    pub seller_cache: SellerCacheConfig,

    /// `[api]` backend overrides
    #[serde(default)]
    pub api: ApiConfig,
}

impl ConfigSchema {
    /// Reject values that would silently misbehave at runtime
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.proximity.max_distance_km {
            if !max.is_finite() {
                return Err(Error::invalid_config_value(
                    "proximity.max_distance_km",
                    "must be a finite number",
                ));
            }
        }

        if self.seller_cache.max_entries == Some(0) {
            return Err(Error::invalid_config_value(
                "seller_cache.max_entries",
                "must be at least 1; omit it for an unbounded cache",
            ));
        }

        if let Some(ref url) = self.api.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(Error::invalid_config_value(
                    "api.base_url",
                    "must start with http:// or https://",
                ));
            }
        }

        if self.api.timeout_secs == Some(0) {
            return Err(Error::invalid_config_value("api.timeout_secs", "cannot be zero"));
        }

        Ok(())
    }
}

/// Distance filtering defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProximityConfig {
    /// Listings farther than this are hidden; unset or <= 0 disables the filter
    #[serde(default)]
    pub max_distance_km: Option<f64>,

    /// Sort nearest first
    #[serde(default)]
    pub sort_by_distance: bool,
}

/// Seller lookup cache settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SellerCacheConfig {
    /// Capacity before the oldest entry is evicted; unset means unbounded
    #[serde(default)]
    pub max_entries: Option<usize>,
}

/// Backend overrides; environment variables fill anything unset
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    /// Backend base URL, used when `MARKETPLACE_API_URL` is unset
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [proximity]
            max_distance_km = 25.0
            sort_by_distance = true

            [seller_cache]
            max_entries = 500

            [api]
            base_url = "https://api.example.com"
            timeout_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(schema.proximity.max_distance_km, Some(25.0));
        assert!(schema.proximity.sort_by_distance);
        assert_eq!(schema.seller_cache.max_entries, Some(500));
        assert_eq!(schema.api.timeout_secs, Some(10));
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let schema: ConfigSchema = toml::from_str("").unwrap();
        assert!(schema.proximity.max_distance_km.is_none());
        assert!(!schema.proximity.sort_by_distance);
        assert!(schema.seller_cache.max_entries.is_none());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut schema = ConfigSchema::default();
        schema.seller_cache.max_entries = Some(0);
        assert!(schema.validate().is_err());

        let mut schema = ConfigSchema::default();
        schema.api.base_url = Some("ftp://example.com".into());
        assert!(schema.validate().is_err());

        let mut schema = ConfigSchema::default();
        schema.api.timeout_secs = Some(0);
        assert!(schema.validate().is_err());
    }
}

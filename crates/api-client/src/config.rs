//! Configuration for the marketplace API client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use marketplace_core::config::ApiConfig;
use marketplace_core::retry::RetryConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Local backend used by the development preset
const DEVELOPMENT_API_URL: &str = "http://localhost:5000/api";

/// Environment types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development backend
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    #[default]
    Production,
}

impl Environment {
    /// Parse from environment variable
    pub fn from_env() -> Self {
        Self::parse(&env::var("MARKETPLACE_ENV").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "development" | "dev" | "local" => Self::Development,
            "staging" | "stage" => Self::Staging,
            _ => Self::Production,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the marketplace REST API
    pub base_url: String,
    /// Bearer token sent with every request
    pub auth_token: Option<String>,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Retry configuration
    pub retry: RetryConfig,
    /// Current environment
    pub environment: Environment,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `MARKETPLACE_API_URL`: Base URL (required outside development)
    /// - `MARKETPLACE_API_TOKEN`: Bearer token
    /// - `MARKETPLACE_ENV`: Environment (development/staging/production)
    /// - `MARKETPLACE_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        Self::from_env_with(&ApiConfig::default())
    }

    /// Create configuration from environment variables, falling back to
    /// the config file's `[api]` section for anything the environment
    /// leaves unset
    pub fn from_env_with(file: &ApiConfig) -> ApiResult<Self> {
        let environment = Environment::from_env();

        let base_url = match (env::var("MARKETPLACE_API_URL"), &file.base_url, environment) {
            (Ok(url), _, _) => url,
            (Err(_), Some(url), _) => url.clone(),
            (Err(_), None, Environment::Development) => DEVELOPMENT_API_URL.to_string(),
            (Err(_), None, _) => return Err(ApiError::missing_env("MARKETPLACE_API_URL")),
        };

        let timeout_secs = env::var("MARKETPLACE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .or(file.timeout_secs)
            .unwrap_or(30);
        let timeout = Duration::from_secs(timeout_secs);

        // Adjust retry config based on environment
        let retry = match environment {
            Environment::Development => RetryConfig::quick(),
            Environment::Staging => RetryConfig::default(),
            Environment::Production => RetryConfig::patient(),
        };

        Ok(Self {
            base_url,
            auth_token: env::var("MARKETPLACE_API_TOKEN").ok(),
            timeout,
            retry,
            environment,
        })
    }

    /// Create development configuration (local backend)
    #[must_use]
    pub fn development() -> Self {
        Self {
            base_url: DEVELOPMENT_API_URL.to_string(),
            auth_token: None,
            timeout: Duration::from_secs(10),
            retry: RetryConfig::quick(),
            environment: Environment::Development,
        }
    }

    /// Create staging configuration
    #[must_use]
    pub fn staging(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
            environment: Environment::Staging,
        }
    }

    /// Create production configuration
    #[must_use]
    pub fn production(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            timeout: Duration::from_secs(30),
            retry: RetryConfig::patient(),
            environment: Environment::Production,
        }
    }

    /// Apply `[api]` overrides from the config file
    #[must_use]
    pub fn with_overrides(mut self, overrides: &ApiConfig) -> Self {
        if let Some(ref url) = overrides.base_url {
            self.base_url.clone_from(url);
        }
        if let Some(secs) = overrides.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the bearer token
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set retry config
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        if self.retry.max_attempts == 0 {
            return Err(ApiError::config("retry.max_attempts must be at least 1"));
        }

        Ok(())
    }
}

//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::UsersApi;
use crate::error::{ApiError, ApiResult};
use marketplace_core::retry::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Marketplace API client with built-in resilience patterns
///
/// This client wraps `reqwest` and adds:
/// - Automatic retry with exponential backoff
/// - Circuit breaker to prevent cascading failures
/// - Request correlation IDs for tracing
#[derive(Clone)]
pub struct MarketplaceClient {
    inner: Client,
    config: Arc<ClientConfig>,
    circuit_breaker: Arc<CircuitBreaker>,
}

impl MarketplaceClient {
    /// Create a new client with default configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static("marketplace-api-client/1.0"),
        );

        if let Some(ref token) = config.auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::config("auth_token contains invalid header characters"))?;
            default_headers.insert(AUTHORIZATION, value);
        }

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        let circuit_breaker = Arc::new(CircuitBreaker::new(CircuitBreakerConfig::default()));

        Ok(Self {
            inner,
            config: Arc::new(config),
            circuit_breaker,
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get circuit breaker state
    #[must_use]
    pub fn circuit_state(&self) -> CircuitState {
        self.circuit_breaker.state()
    }

    /// Reset the circuit breaker
    pub fn reset_circuit(&self) {
        self.circuit_breaker.reset();
    }

    /// Access user/seller endpoints
    #[must_use]
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Build an absolute URL from path segments, percent-encoding each one
    pub fn endpoint_url(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.config.base_url)))?;

        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Perform a GET request to an absolute URL with resilience patterns
    #[instrument(skip(self, url), fields(url = %url))]
    pub async fn get_url<T: DeserializeOwned>(&self, url: &Url) -> ApiResult<T> {
        let request_id = Uuid::new_v4().to_string();

        if !self.circuit_breaker.can_execute() {
            warn!(
                request_id = %request_id,
                url = %url,
                "Circuit breaker is open, rejecting request"
            );
            return Err(ApiError::CircuitOpen);
        }

        self.execute_with_retry(&request_id, Method::GET, url).await
    }

    /// Execute request with retry logic
    async fn execute_with_retry<T: DeserializeOwned>(
        &self,
        request_id: &str,
        method: Method,
        url: &Url,
    ) -> ApiResult<T> {
        let retry_config = &self.config.retry;
        let mut last_error: Option<ApiError> = None;

        for attempt in 0..retry_config.max_attempts {
            // Wait before retry (except first attempt)
            if attempt > 0 {
                let delay = retry_config.delay_for_attempt(attempt);
                debug!(
                    request_id = %request_id,
                    attempt = attempt,
                    delay_ms = delay.as_millis(),
                    "Retrying after delay"
                );
                tokio::time::sleep(delay).await;
            }

            let start = Instant::now();
            let result = self
                .execute_single_request(request_id, method.clone(), url)
                .await;
            let elapsed = start.elapsed();

            match result {
                Ok(value) => {
                    self.circuit_breaker.record_success();
                    debug!(
                        request_id = %request_id,
                        attempt = attempt + 1,
                        elapsed_ms = elapsed.as_millis(),
                        "Request succeeded"
                    );
                    return Ok(value);
                }
                Err(e) => {
                    // A 4xx means the service is healthy; only count real failures
                    if !e.is_client_error() {
                        self.circuit_breaker.record_failure();
                    }

                    if e.is_retryable() && attempt + 1 < retry_config.max_attempts {
                        debug!(
                            request_id = %request_id,
                            attempt = attempt + 1,
                            error = %e,
                            "Request failed, will retry"
                        );
                        last_error = Some(e);
                    } else {
                        debug!(
                            request_id = %request_id,
                            attempt = attempt + 1,
                            error = %e,
                            "Request failed, not retrying"
                        );
                        return Err(e);
                    }
                }
            }
        }

        Err(ApiError::RetriesExhausted {
            attempts: retry_config.max_attempts,
            last_error: last_error.map_or_else(|| "Unknown error".to_string(), |e| e.to_string()),
        })
    }

    /// Execute a single request without retry
    async fn execute_single_request<T: DeserializeOwned>(
        &self,
        request_id: &str,
        method: Method,
        url: &Url,
    ) -> ApiResult<T> {
        let response = self
            .inner
            .request(method, url.clone())
            .header(X_REQUEST_ID, request_id)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = ClientConfig::development();
        let client = MarketplaceClient::with_config(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ClientConfig::development().with_base_url("not a url");
        assert!(MarketplaceClient::with_config(config).is_err());
    }

    #[test]
    fn test_endpoint_url_encodes_segments() {
        let client = MarketplaceClient::with_config(
            ClientConfig::development().with_base_url("https://api.example.com/api/"),
        )
        .unwrap();

        let url = client.endpoint_url(&["user", "user-info", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/user/user-info/a%20b%2Fc");
    }

    #[test]
    fn test_endpoint_url_without_path() {
        let client = MarketplaceClient::with_config(
            ClientConfig::development().with_base_url("http://127.0.0.1:8080"),
        )
        .unwrap();

        let url = client.endpoint_url(&["user", "user-info", "u1"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/user/user-info/u1");
    }
}

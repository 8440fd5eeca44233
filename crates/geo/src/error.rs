//! Error types for the geo crate.
//!
//! The proximity functions themselves never fail; these errors only come
//! from the JSON entry points that parse caller-supplied payloads.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur at the JSON boundary.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Payload had the wrong top-level shape
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with marketplace-core error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Payload had the wrong top-level shape
    InvalidPayload = 10001,
    /// JSON parsing error
    JsonParsing = 10003,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidPayload(_) => GeoErrorCode::InvalidPayload,
            GeoError::JsonError(_) => GeoErrorCode::JsonParsing,
        }
    }
}

/// Parses a JSON array of listings.
pub fn parse_listings(json: &str) -> Result<Vec<crate::Listing>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(GeoError::InvalidPayload("expected a JSON array of listings".into()));
    }
    Ok(serde_json::from_value(value)?)
}

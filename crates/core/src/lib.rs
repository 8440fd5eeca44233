//! Core utilities for the marketplace proximity tools
//!
//! This crate provides shared functionality used by the API client and CLI:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//! - **Retry**: Backoff policies and a circuit breaker for network calls
//!
//! # Example
//!
//! ```rust,no_run
//! use marketplace_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! if let Some(max) = config.schema.proximity.max_distance_km {
//!     println!("Hiding listings beyond {max} km");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod retry;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::retry::{CircuitBreaker, CircuitBreakerConfig, CircuitState, RetryConfig};
}

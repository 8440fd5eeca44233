//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for a specific set of backend endpoints.
//!
//! | Module | Route | Description |
//! |--------|-------|-------------|
//! | `users` | `/user/user-info/{id}` | Seller/user lookup for proximity resolution |

pub mod users;

pub use users::{UserInfoResponse, UsersApi};

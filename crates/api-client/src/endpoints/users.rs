//! User endpoints
//!
//! Maps to the `/user/user-info/{id}` route, which returns the public
//! profile of a seller including whatever location data they have set.

use crate::client::MarketplaceClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Users API interface
#[derive(Clone)]
pub struct UsersApi {
    client: MarketplaceClient,
}

impl UsersApi {
    /// Create a new users API interface
    pub(crate) fn new(client: MarketplaceClient) -> Self {
        Self { client }
    }

    /// Fetch a user's public info
    ///
    /// GET /user/user-info/{id}
    pub async fn user_info(&self, id: &str) -> ApiResult<UserInfoResponse> {
        let url = self.client.endpoint_url(&["user", "user-info", id])?;
        self.client.get_url(&url).await
    }

    /// Fetch a seller record, mapping "no such user" to `None`
    ///
    /// Both an HTTP 404 and a `success: false` body count as absent.
    pub async fn seller(&self, id: &str) -> ApiResult<Option<Value>> {
        match self.user_info(id).await {
            Ok(response) => Ok(response.into_user()),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Response of `GET /user/user-info/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfoResponse {
    /// Backend flag; `false` means the user could not be returned
    pub success: bool,
    /// The user record; its shape varies, so it stays untyped
    #[serde(default)]
    pub user: Option<Value>,
}

impl UserInfoResponse {
    /// The user record if the lookup succeeded and returned one
    #[must_use]
    pub fn into_user(self) -> Option<Value> {
        if self.success {
            self.user.filter(|user| !user.is_null())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_user() {
        let ok: UserInfoResponse =
            serde_json::from_value(json!({"success": true, "user": {"lat": 1.0, "lng": 2.0}})).unwrap();
        assert!(ok.into_user().is_some());

        let failed: UserInfoResponse =
            serde_json::from_value(json!({"success": false, "user": {"lat": 1.0}})).unwrap();
        assert!(failed.into_user().is_none());

        let missing: UserInfoResponse = serde_json::from_value(json!({"success": true})).unwrap();
        assert!(missing.into_user().is_none());

        let null: UserInfoResponse =
            serde_json::from_value(json!({"success": true, "user": null})).unwrap();
        assert!(null.into_user().is_none());
    }
}

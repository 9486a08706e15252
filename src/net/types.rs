//! JSON envelopes for the admin REST endpoints.
//!
//! DESIGN
//! ======
//! The backend wraps every success payload in `{ "data": ... }`. The admin
//! profile is passed through untouched since its shape belongs to the backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Admin profile as returned by the backend, kept as opaque JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminUser(pub serde_json::Value);

impl AdminUser {
    /// Label for the UI: `name`, then `email`, else empty.
    pub fn display_name(&self) -> &str {
        ["name", "email"]
            .iter()
            .find_map(|key| self.0.get(key).and_then(serde_json::Value::as_str))
            .unwrap_or_default()
    }
}

/// Body of `POST /admin/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Success envelope shared by all admin endpoints.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// `data` of a successful login.
#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: AdminUser,
}

/// `data` of `GET /admin/me`.
#[derive(Debug, Deserialize)]
pub struct MeData {
    pub user: AdminUser,
}

/// Error body; every field is optional because proxies may answer too.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

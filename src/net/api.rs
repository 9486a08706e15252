//! Admin REST API client.
//!
//! Every request funnels through [`ApiClient::send`], which derives the
//! `Authorization` header from the token handed in by the caller. Nothing
//! here remembers a token between calls.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx answers become [`ApiError::Status`] carrying the body's `message`
//! when present; callers decide whether to surface or swallow it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use super::types::{AdminUser, Envelope, ErrorBody, LoginData, LoginRequest, MeData};

pub const LOGIN_ENDPOINT: &str = "/admin/login";
pub const LOGOUT_ENDPOINT: &str = "/admin/logout";
pub const ME_ENDPOINT: &str = "/admin/me";

/// `Authorization` header value for `token`, if any.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Bearer {t}"))
}

pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self { transport, base_url: base_url.into() }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST /admin/login` with `{email, password}`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure of the call.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData, ApiError> {
        let body = serde_json::to_value(LoginRequest { email, password })
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = self.send(Method::Post, LOGIN_ENDPOINT, None, Some(body)).await?;
        decode_data(resp)
    }

    /// `POST /admin/logout`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the transport or status failure of the call.
    pub async fn logout(&self, token: Option<&str>) -> Result<(), ApiError> {
        self.send(Method::Post, LOGOUT_ENDPOINT, token, None).await?;
        Ok(())
    }

    /// `GET /admin/me` with the bearer header for `token`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure of the call.
    pub async fn current_user(&self, token: &str) -> Result<AdminUser, ApiError> {
        let resp = self.send(Method::Get, ME_ENDPOINT, Some(token), None).await?;
        decode_data::<MeData>(resp).map(|data| data.user)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest {
            method,
            url: endpoint_url(&self.base_url, path),
            authorization: bearer_header(token),
            body,
        };
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            return Err(status_error(&resp));
        }
        Ok(resp)
    }
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn status_error(resp: &ApiResponse) -> ApiError {
    let message = serde_json::from_value::<ErrorBody>(resp.body.clone())
        .unwrap_or_default()
        .message;
    ApiError::Status { status: resp.status, message }
}

fn decode_data<D: DeserializeOwned>(resp: ApiResponse) -> Result<D, ApiError> {
    serde_json::from_value::<Envelope<D>>(resp.body)
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

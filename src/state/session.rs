//! Admin session: token, profile, and the calls that change them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once at startup (rehydrating the token from storage) and handed to
//! the route guard and the admin pages through context. The token in memory,
//! the persisted token, and the bearer header derived for requests always
//! move together.
//!
//! TRADE-OFFS
//! ==========
//! Concurrent `login`/`logout`/`check_auth` calls are not serialized; the last
//! write wins. A failed `check_auth` racing a fresh `login` can therefore drop
//! the new token. Acceptable for a single-operator admin UI.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::AppConfig;
use crate::net::api::{ApiClient, bearer_header};
use crate::net::error::LOGIN_FAILED_MESSAGE;
use crate::net::transport::Transport;
use crate::net::types::AdminUser;
use crate::state::auth::AuthState;
use crate::util::storage::KeyValueStorage;

/// Result of [`Session::login`], ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failure { error: String },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<AdminUser>,
}

pub struct Session<T, S> {
    api: ApiClient<T>,
    storage: S,
    storage_key: String,
    state: Mutex<SessionState>,
    /// Tokens dropped by a failed check whose backend logout is still owed.
    owed_logouts: Mutex<Vec<String>>,
}

impl<T: Transport, S: KeyValueStorage> Session<T, S> {
    /// Create a session, picking up a token left in `storage` by a previous visit.
    pub fn new(api: ApiClient<T>, storage: S, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let token = storage.get(&storage_key).filter(|t| !t.is_empty());
        if token.is_some() {
            log::debug!("session: rehydrated token from {storage_key}");
        }
        Self {
            api,
            storage,
            storage_key,
            state: Mutex::new(SessionState { token, user: None }),
            owed_logouts: Mutex::new(Vec::new()),
        }
    }

    pub fn from_config(transport: T, storage: S, config: &AppConfig) -> Self {
        Self::new(
            ApiClient::new(transport, config.api_base_url.clone()),
            storage,
            config.token_storage_key.clone(),
        )
    }

    /// Token presence only; validity is confirmed by [`Session::check_auth`].
    pub fn is_authenticated(&self) -> bool {
        self.lock().token.is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.lock().token.clone()
    }

    pub fn user(&self) -> Option<AdminUser> {
        self.lock().user.clone()
    }

    /// Header value every request is sent with right now.
    pub fn authorization_header(&self) -> Option<String> {
        bearer_header(self.lock().token.as_deref())
    }

    pub fn snapshot(&self) -> AuthState {
        let state = self.lock();
        AuthState { user: state.user.clone(), authenticated: state.token.is_some() }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Exchange credentials for a token.
    ///
    /// On failure nothing changes: not the in-memory state, not storage.
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        let data = match self.api.login(email, password).await {
            Ok(data) => data,
            Err(err) => {
                log::warn!("admin login failed: {} {err}", err.error_code());
                return LoginOutcome::Failure { error: err.user_message() };
            }
        };

        if data.token.is_empty() {
            log::warn!("admin login: backend returned an empty token");
            return LoginOutcome::Failure { error: LOGIN_FAILED_MESSAGE.to_owned() };
        }

        if let Err(err) = self.storage.set(&self.storage_key, &data.token) {
            log::warn!("admin login: token not persisted: {} {err}", err.error_code());
            return LoginOutcome::Failure { error: LOGIN_FAILED_MESSAGE.to_owned() };
        }

        let mut state = self.lock();
        state.token = Some(data.token);
        state.user = Some(data.user);
        log::info!("admin login succeeded");
        LoginOutcome::Success
    }

    /// Sign out locally, then tell the backend. Never fails.
    pub async fn logout(&self) {
        let token = self.clear_local();
        self.notify_logout(token.as_deref()).await;
        log::info!("admin logout");
    }

    /// Confirm the held token with `GET /admin/me`.
    ///
    /// Without a token this returns `false` without touching the network. A
    /// rejected or unreachable check signs the session out locally and
    /// returns at once; the backend logout is queued for
    /// [`Session::send_owed_logouts`], which the caller runs on its own task.
    pub async fn check_auth(&self) -> bool {
        let Some(token) = self.token() else {
            return false;
        };

        match self.api.current_user(&token).await {
            Ok(user) => {
                self.lock().user = Some(user);
                true
            }
            Err(err) => {
                log::warn!("admin auth check failed: {} {err}", err.error_code());
                self.clear_local();
                self.lock_owed().push(token);
                false
            }
        }
    }

    pub fn has_owed_logouts(&self) -> bool {
        !self.lock_owed().is_empty()
    }

    /// Send every queued backend logout. Never fails.
    pub async fn send_owed_logouts(&self) {
        let tokens = std::mem::take(&mut *self.lock_owed());
        for token in tokens {
            self.notify_logout(Some(&token)).await;
        }
    }

    /// Drop token and user from memory and storage; returns the dropped token.
    fn clear_local(&self) -> Option<String> {
        let token = {
            let mut state = self.lock();
            state.user = None;
            state.token.take()
        };
        if let Err(err) = self.storage.remove(&self.storage_key) {
            log::warn!("session: token not removed from storage: {} {err}", err.error_code());
        }
        token
    }

    /// Best-effort `POST /admin/logout`; failures are logged and dropped.
    async fn notify_logout(&self, token: Option<&str>) {
        if let Err(err) = self.api.logout(token).await {
            log::warn!("Logout error: {} {err}", err.error_code());
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_owed(&self) -> MutexGuard<'_, Vec<String>> {
        self.owed_logouts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

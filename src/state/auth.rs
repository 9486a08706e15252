//! Auth snapshot for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal` so components re-render when the session logs in
//! or out. The session itself remains the source of truth.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AdminUser;

/// What the UI needs to know about the session at a point in time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<AdminUser>,
    /// Mirrors token presence, not token validity.
    pub authenticated: bool,
}

impl AuthState {
    /// Label for the header bar; empty when nobody is signed in.
    pub fn user_label(&self) -> &str {
        self.user.as_ref().map_or("", AdminUser::display_name)
    }
}

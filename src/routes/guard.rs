//! Pre-navigation guard for admin-only routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before every navigation. Public targets pass straight through; a
//! protected target costs one `GET /admin/me` round trip, every time. No
//! verdict is cached between navigations.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::transport::Transport;
use crate::routes::table::RouteTable;
use crate::state::session::Session;
use crate::util::storage::KeyValueStorage;

/// Per-navigation state: `Pending` until the guard settles on a verdict.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Navigation {
    #[default]
    Pending,
    Allowed,
    Redirected { to: String },
}

impl Navigation {
    /// Where the user ends up, or `None` while the check is in flight.
    pub fn final_path<'a>(&'a self, requested: &'a str) -> Option<&'a str> {
        match self {
            Self::Pending => None,
            Self::Allowed => Some(requested),
            Self::Redirected { to } => Some(to),
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

pub struct NavigationGuard<'a, T, S> {
    session: &'a Session<T, S>,
    table: &'a RouteTable,
    login_path: &'a str,
}

impl<'a, T: Transport, S: KeyValueStorage> NavigationGuard<'a, T, S> {
    pub fn new(session: &'a Session<T, S>, table: &'a RouteTable, login_path: &'a str) -> Self {
        Self { session, table, login_path }
    }

    /// Decide whether navigation to `target` may proceed.
    pub async fn before_each(&self, target: &str) -> Navigation {
        if !self.table.requires_auth(target) {
            return Navigation::Allowed;
        }
        if self.session.check_auth().await {
            log::debug!("guard: allowed {target}");
            Navigation::Allowed
        } else {
            log::debug!("guard: {target} requires auth, redirecting to {}", self.login_path);
            Navigation::Redirected { to: self.login_path.to_owned() }
        }
    }
}

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the authoritative token/user pair and the calls that change
//! it; `auth` is the plain snapshot the UI keeps in a signal.

pub mod auth;
pub mod session;

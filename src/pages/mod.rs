//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `login` owns the admin sign-in flow; `shell` frames every other view until
//! its content lands.

pub mod login;
pub mod shell;

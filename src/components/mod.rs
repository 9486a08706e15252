//! Reusable UI components shared by pages.

pub mod route_outlet;
pub mod session_bar;

//! Route table and navigation guard.
//!
//! ARCHITECTURE
//! ============
//! `table` is the static path → view mapping with per-entry auth metadata;
//! `guard` decides, before each navigation, whether the target may render.

pub mod guard;
pub mod table;

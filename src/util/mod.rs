//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from session and page
//! logic to improve reuse and testability.

pub mod logging;
pub mod storage;

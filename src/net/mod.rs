//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` knows the admin endpoints and derives the bearer header, `transport`
//! moves requests over the wire, `error` classifies failures, and `types`
//! defines the JSON envelopes.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

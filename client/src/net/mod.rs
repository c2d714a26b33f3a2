//! Networking modules for the HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `identity` wraps the sign-in flows, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod identity;
pub mod types;

//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on protocol translation and auth plumbing.

pub mod auth;
pub mod email_auth;
pub mod mailer;
pub mod record;
pub mod session;
pub mod share;

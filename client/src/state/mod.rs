//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `records`, `toast`, `ui`) so individual
//! components can depend on small focused models provided through context.

pub mod auth;
pub mod records;
pub mod toast;
pub mod ui;

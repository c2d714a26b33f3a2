//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render landing chrome, the auth form and record cards while
//! reading/writing shared state from Leptos context providers. Action logic
//! is kept in plain functions over capability traits so it tests natively.

pub mod auth_form;
pub mod file_main;
pub mod landing_header;
pub mod record_card;
pub mod side_user_settings;
pub mod sidebar;
pub mod toast_host;

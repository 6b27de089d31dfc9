//! Admin Module
//!
//! Read-only endpoints for users with `isAdmin`. Admin status is granted at
//! registration from the `ADMIN_USERNAMES` list and travels in the session.

/// HTTP handlers
pub mod handlers;

pub use handlers::{list_users, stats};

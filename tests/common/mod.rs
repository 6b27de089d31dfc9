//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-process test app driven with `tower::ServiceExt::oneshot`
//! - Per-user sessions that carry the `cloudpad.sid` cookie
//! - Authentication shortcuts
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;
pub mod http;

pub use auth_helpers::*;
pub use http::*;

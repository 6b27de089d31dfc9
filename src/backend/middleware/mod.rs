//! Middleware Module
//!
//! HTTP middleware that runs before handlers.
//!
//! # Architecture
//!
//! - **`auth`** - Session login guard, admin guard, and the `AuthUser` extractor
//! - **`json`** - `ApiJson`, a JSON body extractor that rejects with `BackendError`
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use cloudpad::backend::middleware::{require_admin, require_login};
//!
//! # async fn stats() {}
//! let admin: Router = Router::new()
//!     .route("/admin/stats", get(stats))
//!     .route_layer(middleware::from_fn(require_admin))
//!     .route_layer(middleware::from_fn(require_login));
//! ```

pub mod auth;
pub mod json;

pub use auth::{require_admin, require_login, AuthUser, AuthenticatedUser};
pub use json::ApiJson;

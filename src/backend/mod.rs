//! Backend Module
//!
//! This module contains all server-side code for CloudPad: an Axum HTTP
//! server with session-cookie authentication and per-user notes.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, startup and shutdown
//! - **`routes`** - Route groups and router assembly
//! - **`auth`** - Users, sessions, register/login
//! - **`notes`** - Note listing, creation, and saves
//! - **`admin`** - Admin-only user list and stats
//! - **`middleware`** - Login and admin guards
//! - **`db`** - PostgreSQL and in-memory storage
//! - **`error`** - Backend error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - cloudpad-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication and sessions
//! ├── notes/          - Notes
//! ├── admin/          - Admin endpoints
//! ├── middleware/     - Request guards
//! ├── db/             - Storage backends
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! client → session layer → login guard → auth / note service → storage
//!
//! # State Management
//!
//! `AppState` holds the storage handle and the configuration. It is built
//! once by `create_app` and cloned into every handler; there are no
//! globals. Sessions live in the session store owned by the session layer.
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudpad::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::from_env()?).await?;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app.router.clone()).await?;
//! app.shutdown().await;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Storage backends
pub mod db;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Notes
pub mod notes;

/// Admin endpoints
pub mod admin;

/// Middleware for request processing
pub mod middleware;

pub use db::Database;
pub use error::BackendError;
pub use server::{create_app, AppState, Application, ServerConfig};

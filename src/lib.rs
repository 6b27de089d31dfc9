//! CloudPad - Main Library
//!
//! CloudPad is a small multi-user notes service: users register and log in
//! with a session cookie, each user's notes live on the server, and the
//! editor autosaves after a short pause in typing.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between server and client
//!   - `Note`, user projections, request/response bodies
//!   - Input validation and `SharedError`
//!   - Client configuration (`AppConfig`)
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server with tower-sessions cookie sessions
//!   - Register/login with bcrypt, per-user notes, admin endpoints
//!   - PostgreSQL or in-memory storage
//!
//! - **`client`** - Rust client library
//!   - `CloudPadClient` for the HTTP API
//!   - `AutosaveCoordinator` debounced autosave state machine
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the `backend` module and the
//!   `cloudpad-server` binary
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use cloudpad::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::from_env()?).await?;
//! // Serve app.router with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! ## Client-Side
//!
//! ```rust,no_run
//! use cloudpad::client::CloudPadClient;
//! use cloudpad::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CloudPadClient::new(AppConfig::default())?;
//! client.register("alice", "pw1").await?;
//! let note = client.open_latest_note().await?;
//! client.save_note(note.id, "draft").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation and serialization
//! - `backend::BackendError` for HTTP handlers (implements `IntoResponse`)
//! - `client::ClientError` for the client library

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// HTTP client and autosave
pub mod client;

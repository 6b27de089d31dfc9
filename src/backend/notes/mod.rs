//! Notes Module
//!
//! Per-user notes: listing, creation, and content saves.
//!
//! # Module Structure
//!
//! ```text
//! notes/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - PostgreSQL queries for the notes table
//! ├── service.rs   - Ownership-checked note operations
//! └── handlers.rs  - HTTP handlers
//! ```
//!
//! # Access Control
//!
//! The session's user id is the only access-control boundary. Listing is
//! filtered by owner and every save calls `service::assert_owner` first.

/// Note database operations
pub mod db;

/// Note operations scoped to the calling user
pub mod service;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_note, list_notes, save_note};

//! Authentication Module
//!
//! This module handles user registration, login, and session management.
//!
//! # Architecture
//!
//! - **`users`** - User record and its PostgreSQL queries
//! - **`sessions`** - Session cookie layer and session payload helpers
//! - **`service`** - Register and login logic, bcrypt on the blocking pool
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - tower-sessions setup and helpers
//! ├── service.rs      - Register / login
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → user created → session created
//! 2. **Login**: username + password → credentials verified → session id regenerated
//! 3. **Me**: session cookie → session payload → username
//! 4. **Logout**: session record deleted, cookie expired
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Sessions are server-side; the cookie carries only a signed id
//! - Sessions expire after 24 hours of inactivity

/// User data model and database operations
pub mod users;

/// Session management
pub mod sessions;

/// Registration and login
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, logout, register};
pub use users::User;

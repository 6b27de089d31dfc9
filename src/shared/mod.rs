//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and the client library. These types are the JSON bodies that
//! travel over the CloudPad HTTP API.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code:
//!
//! - **`note`** - The `Note` record as stored and returned by `/notes`
//! - **`user`** - Password-free user projections (`UserInfo`, `SessionUser`)
//! - **`api`** - Request and response bodies for every endpoint
//! - **`error`** - Validation and serialization errors
//! - **`config`** - Client configuration (`AppConfig`)

/// Note data structure
pub mod note;

/// User projections safe to send over the wire
pub mod user;

/// Request and response bodies
pub mod api;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use note::{Note, UNTITLED};
pub use user::{SessionUser, UserInfo};
pub use api::{
    Credentials, LoginResponse, MeResponse, SaveNoteRequest, StatsResponse, SuccessResponse,
    SAVED,
};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};

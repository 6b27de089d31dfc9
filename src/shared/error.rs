//! Shared Error Types
//!
//! Errors that can be produced on either side of the CloudPad API: while
//! decoding a JSON body or while checking user input before it is sent
//! or stored.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - A field failed an input rule (username shape, empty password)
//!
//! # Usage
//!
//! ```rust
//! use cloudpad::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "Username cannot be empty");
//! assert!(error.to_string().contains("username"));
//! ```
use thiserror::Error;

/// Longest accepted username, in characters
pub const MAX_USERNAME_LEN: usize = 64;

/// Shared error types that can occur in both client and server
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

/// Normalize and check a username
///
/// Leading and trailing whitespace is trimmed. The result must be between
/// 1 and [`MAX_USERNAME_LEN`] characters and contain no inner whitespace.
///
/// # Returns
/// The trimmed username
pub fn validate_username(raw: &str) -> Result<String, SharedError> {
    let username = raw.trim();

    if username.is_empty() {
        return Err(SharedError::validation("username", "Username cannot be empty"));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(SharedError::validation(
            "username",
            format!("Username must be at most {} characters", MAX_USERNAME_LEN),
        ));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(SharedError::validation(
            "username",
            "Username cannot contain whitespace",
        ));
    }

    Ok(username.to_string())
}

/// Check that a password is present. Passwords are never trimmed.
pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.is_empty() {
        return Err(SharedError::validation("password", "Password cannot be empty"));
    }
    Ok(())
}

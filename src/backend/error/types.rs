/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are returned from HTTP handlers and converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Authentication Errors (401 / 409)
 *
 * - `DuplicateUser` - registration with a taken username
 * - `InvalidUser` - login with an unknown username
 * - `WrongPassword` - login with a bad password
 * - `NotLoggedIn` - no session, or an expired one
 *
 * ## Authorization Errors (403)
 *
 * - `Forbidden` - non-admin on an admin route, or a note owned by someone else
 *
 * ## Request Errors (400 / 404 / 405 / 415 / 422)
 *
 * - `MissingNoteId`, `NotFound`, and validation failures from the shared module
 * - `InvalidBody` - a JSON body the extractor rejected, with the rejection's status
 * - `MethodNotAllowed` - known path, wrong method
 *
 * ## Internal Errors (500)
 *
 * Storage, session store, and hashing failures. These are logged with their
 * detail and reported to the client with a generic message.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::db::StoreError;
use crate::shared::SharedError;

/// Message sent to clients for any 5xx error
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use cloudpad::backend::error::BackendError;
///
/// let err = BackendError::forbidden("Admin access required");
/// assert_eq!(err.status_code().as_u16(), 403);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Username already registered
    #[error("User already exists")]
    DuplicateUser,

    /// No user with the given username
    #[error("Invalid user")]
    InvalidUser,

    /// Password did not match the stored hash
    #[error("Wrong password")]
    WrongPassword,

    /// Request carries no valid session
    #[error("Not logged in")]
    NotLoggedIn,

    /// Authenticated, but not allowed to touch this resource
    #[error("{message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// `POST /save` without a `noteId`
    #[error("noteId missing")]
    MissingNoteId,

    /// Resource does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Request body missing, not JSON, or the wrong shape
    #[error("{message}")]
    InvalidBody {
        /// 400, 413, 415, or 422, as decided by the extractor
        status: StatusCode,
        message: String,
    },

    /// Route exists but not for this method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Shared error (input validation, serialization)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Data store unavailable or query failed
    #[error("Storage error: {0}")]
    Storage(StoreError),

    /// Session store failure
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Password hashing failure, including a panicked blocking task
    #[error("Hashing error: {message}")]
    Hashing {
        /// Human-readable error message
        message: String,
    },
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername(_) => Self::DuplicateUser,
            other => Self::Storage(other),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl BackendError {
    /// Create a new forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a new not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new hashing error
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `DuplicateUser` - 409 Conflict
    /// - `InvalidUser`, `WrongPassword`, `NotLoggedIn` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `MissingNoteId`, validation - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `MethodNotAllowed` - 405 Method Not Allowed
    /// - `InvalidBody` - whatever the JSON extractor chose
    /// - `Storage`, `Session`, `Hashing`, serialization - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateUser => StatusCode::CONFLICT,
            Self::InvalidUser | Self::WrongPassword | Self::NotLoggedIn => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::MissingNoteId => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidBody { status, .. } => *status,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Storage(_) | Self::Session(_) | Self::Hashing { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message shown to the client
    ///
    /// Internal failures never leak their detail.
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            return INTERNAL_ERROR_MESSAGE.to_string();
        }
        match self {
            Self::SharedError(SharedError::ValidationError { message, .. }) => message.clone(),
            other => other.to_string(),
        }
    }
}

/**
 * API Request and Response Types
 *
 * JSON bodies exchanged between the CloudPad server and its clients.
 * Keys are camelCase on the wire.
 */

use serde::{Deserialize, Serialize};

/// Plain-text body returned by a successful `POST /save`
pub const SAVED: &str = "saved";

/// Register / login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    /// Plaintext password, hashed before storage and never logged
    pub password: String,
}

/// `{ "success": true }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Returned by `POST /login`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub is_admin: bool,
}

/// Returned by `GET /me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeResponse {
    pub username: String,
}

/// Body of `POST /save`
///
/// `note_id` stays optional so a missing id can be reported as its own
/// error instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveNoteRequest {
    #[serde(default)]
    pub note_id: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// Returned by `GET /admin/stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_users: u64,
    pub total_notes: u64,
}

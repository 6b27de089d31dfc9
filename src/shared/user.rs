/**
 * User Projections
 *
 * Password-free views of a user. `UserInfo` is what the admin listing
 * returns; `SessionUser` is the payload kept in a server-side session.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User information safe to send to clients (no password hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

/// Identity carried by a session
///
/// Written once when the session is established and read on every
/// authenticated request. It is trusted for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

impl From<UserInfo> for SessionUser {
    fn from(info: UserInfo) -> Self {
        Self {
            user_id: info.id,
            username: info.username,
            is_admin: info.is_admin,
        }
    }
}

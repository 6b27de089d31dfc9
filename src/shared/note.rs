/**
 * Note Data Structure
 *
 * A note belongs to exactly one user (`user_id`) and is only ever visible
 * to or mutable by that user. Notes are created empty with the title
 * "Untitled" and afterwards only their `content` is replaced.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to every freshly created note
pub const UNTITLED: &str = "Untitled";

/// A single note
///
/// Serialized with camelCase keys (`userId`, `createdAt`, `updatedAt`) so the
/// browser client can read it without renaming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique note ID
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every save
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Build a new empty note owned by `user_id`
    pub fn untitled(user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: UNTITLED.to_string(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` owns this note
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

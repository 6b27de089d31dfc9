/**
 * In-Memory Storage
 *
 * Users and notes kept in process memory behind a single `RwLock`. Nothing
 * survives a restart. Username uniqueness is checked under the write lock
 * so concurrent registrations of the same name cannot both succeed.
 */

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::db::StoreError;
use crate::shared::Note;

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    usernames: HashMap<String, Uuid>,
    notes: HashMap<Uuid, Note>,
}

/// Process-local credential and note store
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDatabase {
    pub async fn create_user(&self, user: &User) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.usernames.contains_key(&user.username) {
            return Err(StoreError::DuplicateUsername(user.username.clone()));
        }
        tables.usernames.insert(user.username.clone(), user.id);
        tables.users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        let tables = self.tables.read().await;
        tables
            .usernames
            .get(username)
            .and_then(|id| tables.users.get(id))
            .cloned()
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Option<User> {
        self.tables.read().await.users.get(&id).cloned()
    }

    pub async fn list_users(&self) -> Vec<User> {
        let tables = self.tables.read().await;
        let mut users: Vec<User> = tables.users.values().cloned().collect();
        users.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.username.cmp(&b.username))
        });
        users
    }

    pub async fn count_users(&self) -> u64 {
        self.tables.read().await.users.len() as u64
    }

    pub async fn create_note(&self, note: &Note) -> Note {
        self.tables
            .write()
            .await
            .notes
            .insert(note.id, note.clone());
        note.clone()
    }

    pub async fn list_notes_for_owner(&self, user_id: Uuid) -> Vec<Note> {
        let tables = self.tables.read().await;
        let mut notes: Vec<Note> = tables
            .notes
            .values()
            .filter(|note| note.is_owned_by(user_id))
            .cloned()
            .collect();
        notes.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        notes
    }

    pub async fn get_note(&self, id: Uuid) -> Option<Note> {
        self.tables.read().await.notes.get(&id).cloned()
    }

    pub async fn update_note_content(
        &self,
        id: Uuid,
        content: &str,
        now: DateTime<Utc>,
    ) -> Option<Note> {
        let mut tables = self.tables.write().await;
        let note = tables.notes.get_mut(&id)?;
        note.content = content.to_string();
        // Strictly increasing, even for saves within one clock tick
        note.updated_at = now.max(note.updated_at + Duration::microseconds(1));
        Some(note.clone())
    }

    pub async fn count_notes(&self) -> u64 {
        self.tables.read().await.notes.len() as u64
    }
}

/**
 * Note Service
 *
 * Per-user note operations. Every operation takes the caller's user id
 * from the session, and every mutation goes through `assert_owner` before
 * it touches the store.
 *
 * Concurrent saves to the same note are not coordinated: the last write
 * wins and there is no version check.
 */

use chrono::Utc;
use uuid::Uuid;

use crate::backend::db::Database;
use crate::backend::error::BackendError;
use crate::shared::Note;

/// Ownership check
///
/// Fails with 403 when `note` belongs to someone other than `user_id`.
pub fn assert_owner(note: &Note, user_id: Uuid) -> Result<(), BackendError> {
    if note.is_owned_by(user_id) {
        Ok(())
    } else {
        tracing::warn!(
            "User {} attempted to access note {} owned by another user",
            user_id,
            note.id
        );
        Err(BackendError::forbidden("Note belongs to another user"))
    }
}

/// The caller's notes, most recently updated first
pub async fn list(db: &Database, user_id: Uuid) -> Result<Vec<Note>, BackendError> {
    Ok(db.list_notes_for_owner(user_id).await?)
}

/// Create an empty "Untitled" note for the caller
pub async fn create_new(db: &Database, user_id: Uuid) -> Result<Note, BackendError> {
    let note = db.create_note(&Note::untitled(user_id, Utc::now())).await?;
    tracing::debug!("Created note {} for user {}", note.id, user_id);
    Ok(note)
}

/// Replace a note's content
///
/// # Arguments
/// * `user_id` - Caller, from the session
/// * `note_id` - Raw id from the request body
/// * `content` - New content, stored as-is
///
/// # Errors
/// * `MissingNoteId` - no id, or an empty one
/// * `NotFound` - id is malformed or no such note exists
/// * `Forbidden` - note belongs to another user; content is left unchanged
pub async fn save(
    db: &Database,
    user_id: Uuid,
    note_id: Option<&str>,
    content: &str,
) -> Result<Note, BackendError> {
    let raw_id = note_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(BackendError::MissingNoteId)?;

    let id = Uuid::parse_str(raw_id).map_err(|_| {
        tracing::debug!("Save with malformed note id: {}", raw_id);
        BackendError::not_found("Note not found")
    })?;

    let note = db
        .get_note(id)
        .await?
        .ok_or_else(|| BackendError::not_found("Note not found"))?;
    assert_owner(&note, user_id)?;

    let saved = db
        .update_note_content(id, content, Utc::now())
        .await?
        .ok_or_else(|| BackendError::not_found("Note not found"))?;

    tracing::debug!("Saved note {} ({} bytes)", saved.id, saved.content.len());
    Ok(saved)
}

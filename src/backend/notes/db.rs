/**
 * Note Database Operations
 *
 * PostgreSQL queries for the `notes` table. Ownership is not checked here;
 * callers go through the note service, which asserts ownership first.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::db::StoreError;
use crate::shared::Note;

/// Insert a freshly built note and return the stored row
pub async fn create_note(pool: &PgPool, note: &Note) -> Result<Note, StoreError> {
    let note = sqlx::query_as::<_, Note>(
        r#"
        INSERT INTO notes (id, user_id, title, content, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, title, content, created_at, updated_at
        "#,
    )
    .bind(note.id)
    .bind(note.user_id)
    .bind(&note.title)
    .bind(&note.content)
    .bind(note.created_at)
    .bind(note.updated_at)
    .fetch_one(pool)
    .await?;

    Ok(note)
}

/// Notes owned by `user_id`, most recently updated first
pub async fn list_notes_for_owner(pool: &PgPool, user_id: Uuid) -> Result<Vec<Note>, StoreError> {
    let notes = sqlx::query_as::<_, Note>(
        r#"
        SELECT id, user_id, title, content, created_at, updated_at
        FROM notes
        WHERE user_id = $1
        ORDER BY updated_at DESC, created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(notes)
}

/// Load a single note by ID regardless of owner
pub async fn get_note(pool: &PgPool, id: Uuid) -> Result<Option<Note>, StoreError> {
    let note = sqlx::query_as::<_, Note>(
        r#"
        SELECT id, user_id, title, content, created_at, updated_at
        FROM notes
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(note)
}

/// Replace the content of a note
///
/// `updated_at` always moves forward, even when two saves land within the
/// same clock tick.
///
/// # Returns
/// The updated note, or None if it no longer exists
pub async fn update_note_content(
    pool: &PgPool,
    id: Uuid,
    content: &str,
    now: DateTime<Utc>,
) -> Result<Option<Note>, StoreError> {
    let note = sqlx::query_as::<_, Note>(
        r#"
        UPDATE notes
        SET content = $1,
            updated_at = GREATEST($2, updated_at + INTERVAL '1 microsecond')
        WHERE id = $3
        RETURNING id, user_id, title, content, created_at, updated_at
        "#,
    )
    .bind(content)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(note)
}

/// Number of notes across all users
pub async fn count_notes(pool: &PgPool) -> Result<u64, StoreError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes")
        .fetch_one(pool)
        .await?;

    Ok(count.max(0) as u64)
}

/**
 * Note Handlers
 *
 * All routes here sit behind the login guard, so `AuthUser` is always
 * present.
 *
 * - GET /notes - the caller's notes, most recently updated first
 * - POST /notes/new - create an empty note
 * - POST /save - replace a note's content, replies with plain-text `saved`
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::db::Database;
use crate::backend::error::BackendError;
use crate::backend::middleware::{ApiJson, AuthUser};
use crate::backend::notes::service;
use crate::shared::{Note, SaveNoteRequest, SAVED};

/// List notes handler
pub async fn list_notes(
    State(db): State<Database>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Note>>, BackendError> {
    let notes = service::list(&db, user.user_id).await?;
    Ok(Json(notes))
}

/// Create note handler
pub async fn create_note(
    State(db): State<Database>,
    AuthUser(user): AuthUser,
) -> Result<Json<Note>, BackendError> {
    let note = service::create_new(&db, user.user_id).await?;
    Ok(Json(note))
}

/// Save note handler
///
/// # Errors
///
/// * `400 Bad Request` - `noteId missing`
/// * `403 Forbidden` - note belongs to another user
/// * `404 Not Found` - no such note
/// * `422 Unprocessable Entity` - body fields have the wrong type
pub async fn save_note(
    State(db): State<Database>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<SaveNoteRequest>,
) -> Result<(StatusCode, &'static str), BackendError> {
    service::save(&db, user.user_id, request.note_id.as_deref(), &request.content).await?;
    Ok((StatusCode::OK, SAVED))
}

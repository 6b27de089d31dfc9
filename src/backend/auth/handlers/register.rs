/**
 * Register Handler
 *
 * POST /register
 *
 * # Registration Process
 *
 * 1. Validate and trim the username, check the password is present
 * 2. Reject a taken username with 409
 * 3. Hash the password (bcrypt, blocking pool) and store the user
 * 4. Bind the new user to a fresh session
 */
use axum::{extract::State, response::Json};
use tower_sessions::Session;

use crate::backend::auth::service;
use crate::backend::auth::sessions::create_session;
use crate::backend::error::BackendError;
use crate::backend::middleware::ApiJson;
use crate::backend::server::state::AppState;
use crate::shared::{Credentials, SuccessResponse};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - username or password fails validation
/// * `415` / `422` - body is not JSON credentials
/// * `409 Conflict` - `User already exists`
/// * `500 Internal Server Error` - storage, hashing, or session failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice", "password": "pw1" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "success": true }
/// ```
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    ApiJson(request): ApiJson<Credentials>,
) -> Result<Json<SuccessResponse>, BackendError> {
    tracing::info!("Register request for: {}", request.username.trim());

    let user = service::register(
        &state.db,
        &state.config,
        &request.username,
        &request.password,
    )
    .await?;
    create_session(&session, &user).await?;

    Ok(Json(SuccessResponse::ok()))
}

/**
 * Login Handler
 *
 * POST /login
 *
 * # Authentication Process
 *
 * 1. Look up the user by username
 * 2. Verify the password with bcrypt
 * 3. Regenerate the session id and bind the user to it
 * 4. Return the admin flag so the client can show admin tools
 *
 * # Security
 *
 * - A failed login does not create, modify, or destroy any session
 * - The session id always changes on success (no session fixation)
 * - Passwords are never logged or returned
 */
use axum::{extract::State, response::Json};
use tower_sessions::Session;

use crate::backend::auth::service;
use crate::backend::auth::sessions::regenerate_session;
use crate::backend::db::Database;
use crate::backend::error::BackendError;
use crate::backend::middleware::ApiJson;
use crate::shared::{Credentials, LoginResponse};

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - `Invalid user` or `Wrong password`
/// * `500 Internal Server Error` - storage failure, or the session could not
///   be regenerated
///
/// # Example Response
///
/// ```json
/// { "success": true, "isAdmin": false }
/// ```
pub async fn login(
    State(db): State<Database>,
    session: Session,
    ApiJson(request): ApiJson<Credentials>,
) -> Result<Json<LoginResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.username.trim());

    let user = service::login(&db, &request.username, &request.password).await?;
    regenerate_session(&session, &user).await?;

    Ok(Json(LoginResponse {
        success: true,
        is_admin: user.is_admin,
    }))
}

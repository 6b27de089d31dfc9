/**
 * Get Current User Handler
 *
 * GET /me, behind the login guard. Returns the username bound to the
 * session.
 */

use axum::response::Json;

use crate::backend::middleware::AuthUser;
use crate::shared::MeResponse;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// { "username": "alice" }
/// ```
pub async fn get_me(AuthUser(user): AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        username: user.username,
    })
}

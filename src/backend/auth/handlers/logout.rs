/**
 * Logout Handler
 *
 * GET /logout
 *
 * Destroys the session and sends the browser back to the login page.
 * Logging out without a session is not an error.
 */
use axum::response::Redirect;
use tower_sessions::Session;

use crate::backend::auth::sessions::destroy_session;

/// Where the browser lands after logging out
pub const LOGOUT_REDIRECT: &str = "/login.html";

/// Logout handler
///
/// Always redirects. A session store failure is logged; the cookie is
/// still expired by the session layer.
pub async fn logout(session: Session) -> Redirect {
    if let Err(e) = destroy_session(&session).await {
        tracing::error!("Failed to destroy session on logout: {}", e);
    }
    Redirect::to(LOGOUT_REDIRECT)
}

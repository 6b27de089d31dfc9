/**
 * Authentication Middleware
 *
 * Route guards for session-protected endpoints.
 *
 * - `require_login` resolves the session cookie to a `SessionUser` and
 *   attaches it to the request as `AuthenticatedUser`. No session means
 *   401 `NotLoggedIn`.
 * - `require_admin` must run after `require_login` and rejects non-admins
 *   with 403.
 *
 * Handlers read the identity with the `AuthUser` extractor.
 */

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::backend::auth::sessions::current_user;
use crate::backend::error::BackendError;
use crate::shared::SessionUser;

/// Identity of the caller, taken from the session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

impl From<SessionUser> for AuthenticatedUser {
    fn from(user: SessionUser) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            is_admin: user.is_admin,
        }
    }
}

/// Login guard
///
/// Returns 401 Unauthorized if the request has no session or the session
/// has expired.
pub async fn require_login(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = current_user(&session).await?.ok_or_else(|| {
        tracing::warn!("Rejected {}: not logged in", request.uri().path());
        BackendError::NotLoggedIn
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser::from(user));

    Ok(next.run(request).await)
}

/// Admin guard
///
/// Returns 403 Forbidden if the authenticated user is not an admin.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, BackendError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or(BackendError::NotLoggedIn)?;

    if !user.is_admin {
        tracing::warn!("Admin access denied for user: {}", user.username);
        return Err(BackendError::forbidden("Admin access required"));
    }

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only valid on routes behind `require_login`; elsewhere it rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::NotLoggedIn
            })?;

        Ok(AuthUser(user))
    }
}

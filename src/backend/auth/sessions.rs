/**
 * Session Management
 *
 * Server-side sessions on top of `tower-sessions`. The client only ever
 * holds an opaque, signed id in the `cloudpad.sid` cookie; the identity
 * (`SessionUser`) stays in the session store.
 *
 * # Cookie
 *
 * - Name `cloudpad.sid`, path `/`
 * - `HttpOnly`, `SameSite=Lax`, `Secure` when `COOKIE_SECURE` is set
 * - Expires after 24 hours of inactivity
 * - Signed with a key derived from `SESSION_SECRET` (SHA-512)
 *
 * # Lifecycle
 *
 * - `create_session` - after registration
 * - `regenerate_session` - after login, a fresh id replaces any old one
 * - `current_user` - on every authenticated request
 * - `destroy_session` - on logout, deletes the record and expires the cookie
 */

use sha2::{Digest, Sha512};
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, Session, SessionManagerLayer, SessionStore};

use crate::backend::error::BackendError;
use crate::backend::server::config::ServerConfig;
use crate::shared::SessionUser;

/// Session cookie name
pub const SESSION_COOKIE_NAME: &str = "cloudpad.sid";

/// Key under which the `SessionUser` payload is stored
pub const SESSION_USER_KEY: &str = "user";

/// Inactivity window after which a session expires
pub const SESSION_TTL_HOURS: i64 = 24;

/// Derive the cookie signing key
///
/// With a secret the key is stable across restarts. Without one a random
/// key is generated and every restart logs all users out.
pub fn session_key(secret: Option<&str>) -> Key {
    match secret {
        Some(secret) => Key::from(Sha512::digest(secret.as_bytes()).as_slice()),
        None => {
            tracing::warn!("SESSION_SECRET not set. Using a random key; sessions end on restart.");
            Key::generate()
        }
    }
}

/// Build the session layer for a given store
pub fn session_layer<S>(store: S, config: &ServerConfig) -> SessionManagerLayer<S, SignedCookie>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_path("/")
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(config.cookie_secure)
        .with_expiry(Expiry::OnInactivity(time::Duration::hours(SESSION_TTL_HOURS)))
        .with_signed(session_key(config.session_secret.as_deref()))
}

/// Establish a session for a newly registered user
///
/// A session id the client already presented is rotated, so a fixed id can
/// never become authenticated.
pub async fn create_session(session: &Session, user: &SessionUser) -> Result<(), BackendError> {
    if session.id().is_some() {
        session.cycle_id().await?;
    }
    session.insert(SESSION_USER_KEY, user).await?;
    tracing::debug!("Session created for {}", user.username);
    Ok(())
}

/// Issue a fresh session id and store `user` under it
///
/// The old id stops working. If the store fails the caller gets an error and
/// no session is established.
pub async fn regenerate_session(session: &Session, user: &SessionUser) -> Result<(), BackendError> {
    session.cycle_id().await.map_err(|e| {
        tracing::error!("Failed to regenerate session: {}", e);
        e
    })?;
    session.insert(SESSION_USER_KEY, user).await?;
    tracing::debug!("Session regenerated for {}", user.username);
    Ok(())
}

/// Identity bound to this session, if any
pub async fn current_user(session: &Session) -> Result<Option<SessionUser>, BackendError> {
    Ok(session.get::<SessionUser>(SESSION_USER_KEY).await?)
}

/// Delete the session record and expire the cookie
pub async fn destroy_session(session: &Session) -> Result<(), BackendError> {
    session.flush().await?;
    Ok(())
}

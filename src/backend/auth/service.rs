/**
 * Auth Service
 *
 * Registration and credential checks against the credential store.
 * Handlers call these and then bind the returned identity to a session.
 *
 * bcrypt is CPU bound, so hashing and verification run on the blocking
 * thread pool instead of stalling the async workers.
 */

use tokio::task;

use crate::backend::auth::users::User;
use crate::backend::db::Database;
use crate::backend::error::BackendError;
use crate::backend::server::config::ServerConfig;
use crate::shared::error::{validate_password, validate_username};
use crate::shared::SessionUser;

/// Hash a password with bcrypt at the given cost
pub async fn hash_password(password: String, cost: u32) -> Result<String, BackendError> {
    task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| BackendError::hashing(format!("hashing task failed: {}", e)))?
        .map_err(|e| BackendError::hashing(e.to_string()))
}

/// Check a password against a stored bcrypt hash
pub async fn verify_password(password: String, hash: String) -> Result<bool, BackendError> {
    task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| BackendError::hashing(format!("verification task failed: {}", e)))?
        .map_err(|e| BackendError::hashing(e.to_string()))
}

/// Create a new user
///
/// # Arguments
/// * `db` - Credential store
/// * `config` - Supplies the bcrypt cost and the admin username list
/// * `username` - Requested username, trimmed before use
/// * `password` - Plaintext password
///
/// # Returns
/// The identity to bind to the new session
///
/// # Errors
/// * `Validation` - username or password fails the input rules
/// * `DuplicateUser` - username already taken
/// * `Storage` / `Hashing` - internal failures
pub async fn register(
    db: &Database,
    config: &ServerConfig,
    username: &str,
    password: &str,
) -> Result<SessionUser, BackendError> {
    let username = validate_username(username)?;
    validate_password(password)?;

    // Cheap early exit; the store's unique constraint still decides races
    if db.get_user_by_username(&username).await?.is_some() {
        tracing::warn!("Registration rejected, username taken: {}", username);
        return Err(BackendError::DuplicateUser);
    }

    let password_hash = hash_password(password.to_string(), config.bcrypt_cost).await?;
    let is_admin = config.is_admin_username(&username);
    let user = db
        .create_user(&User::new(username, password_hash, is_admin))
        .await
        .map_err(|e| {
            tracing::warn!("Failed to create user: {}", e);
            BackendError::from(e)
        })?;

    tracing::info!("User registered: {} (admin: {})", user.username, user.is_admin);
    Ok(user.info().into())
}

/// Authenticate a user
///
/// # Errors
/// * `InvalidUser` - no such username
/// * `WrongPassword` - hash comparison failed
///
/// No session is touched here, so a failed login leaves any existing
/// session exactly as it was.
pub async fn login(
    db: &Database,
    username: &str,
    password: &str,
) -> Result<SessionUser, BackendError> {
    let username = username.trim();

    let user = db.get_user_by_username(username).await?.ok_or_else(|| {
        tracing::warn!("Login failed, user not found: {}", username);
        BackendError::InvalidUser
    })?;

    let valid = verify_password(password.to_string(), user.password_hash.clone()).await?;
    if !valid {
        tracing::warn!("Login failed, wrong password for user: {}", username);
        return Err(BackendError::WrongPassword);
    }

    tracing::info!("User logged in: {}", user.username);
    Ok(user.info().into())
}

/**
 * User Model and Database Operations
 *
 * This module holds the credential record and its PostgreSQL queries.
 * Handlers never call these directly; they go through
 * [`Database`](crate::backend::db::Database), which routes to either these
 * queries or the in-memory store.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ssr")]
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::db::StoreError;
use crate::shared::UserInfo;

/// User struct representing a row of the `users` table
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique, trimmed, no whitespace)
    pub username: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the user may call the `/admin` endpoints
    pub is_admin: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "ssr")]
impl User {
    /// Build a new user record ready for insertion
    pub fn new(username: String, password_hash: String, is_admin: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            is_admin,
            created_at: Utc::now(),
        }
    }

    /// Project to the password-free view sent to clients
    pub fn info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username.clone(),
            is_admin: self.is_admin,
        }
    }
}

/// Insert a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user` - Fully built user record
///
/// # Errors
/// `StoreError::DuplicateUsername` when the unique index on `username` rejects the row
#[cfg(feature = "ssr")]
pub async fn create_user(pool: &PgPool, user: &User) -> Result<User, StoreError> {
    let created = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, is_admin, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, username, password_hash, is_admin, created_at
        "#,
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(user.is_admin)
    .bind(user.created_at)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::DuplicateUsername(user.username.clone())
        }
        other => StoreError::Sqlx(other),
    })?;

    Ok(created)
}

/// Get user by username
///
/// # Returns
/// User or None if not found
#[cfg(feature = "ssr")]
pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, StoreError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, is_admin, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
#[cfg(feature = "ssr")]
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, StoreError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, is_admin, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// All users, oldest first
#[cfg(feature = "ssr")]
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, StoreError> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, is_admin, created_at
        FROM users
        ORDER BY created_at ASC, username ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Number of registered users
#[cfg(feature = "ssr")]
pub async fn count_users(pool: &PgPool) -> Result<u64, StoreError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count.max(0) as u64)
}

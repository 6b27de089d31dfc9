//! Storage Module
//!
//! The credential store and note store behind one handle.
//!
//! # Architecture
//!
//! - **`Database::Postgres`** - sqlx `PgPool`, schema managed by `migrations/`
//! - **`Database::Memory`** - process-local maps, used when `DATABASE_URL`
//!   is unset and by the test suite
//!
//! # Module Structure
//!
//! ```text
//! db/
//! ├── mod.rs     - Database handle, StoreError, connection + migration
//! └── memory.rs  - In-memory backend
//! ```
//!
//! The PostgreSQL queries themselves live next to their domain:
//! `auth::users` for users and `notes::db` for notes.
//!
//! # Thread Safety
//!
//! `Database` is cheap to clone and safe to share across handlers: the pool
//! is internally reference counted and the memory backend wraps its maps in
//! `Arc<RwLock<_>>`.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::{self, User};
use crate::backend::notes::db as notes_db;
use crate::shared::Note;

/// In-memory storage backend
pub mod memory;

pub use memory::MemoryDatabase;

/// Storage failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Username already taken
    #[error("username already exists: {0}")]
    DuplicateUsername(String),

    /// Query or connection failure
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Storage handle shared by every request
#[derive(Clone)]
pub enum Database {
    Postgres(PgPool),
    Memory(MemoryDatabase),
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Postgres(_) => f.write_str("Database::Postgres"),
            Self::Memory(_) => f.write_str("Database::Memory"),
        }
    }
}

impl Database {
    /// Connect to PostgreSQL and bring the schema up to date
    ///
    /// # Arguments
    /// * `database_url` - PostgreSQL connection URL
    ///
    /// # Errors
    /// Connection or migration failure. Unlike a missing `DATABASE_URL`,
    /// a configured but unreachable database stops startup.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create database connection pool: {:?}", e);
                e
            })?;

        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&pool).await.map_err(|e| {
            tracing::error!("Failed to run database migrations: {}", e);
            e
        })?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self::Postgres(pool))
    }

    /// Fresh, empty in-memory storage
    pub fn memory() -> Self {
        Self::Memory(MemoryDatabase::default())
    }

    /// The PostgreSQL pool, when this is a PostgreSQL backend
    pub fn pool(&self) -> Option<&PgPool> {
        match self {
            Self::Postgres(pool) => Some(pool),
            Self::Memory(_) => None,
        }
    }

    /// Close the connection pool. No-op for memory storage.
    pub async fn close(&self) {
        if let Self::Postgres(pool) = self {
            pool.close().await;
            tracing::info!("Database connection pool closed");
        }
    }

    pub async fn create_user(&self, user: &User) -> Result<User, StoreError> {
        match self {
            Self::Postgres(pool) => users::create_user(pool, user).await,
            Self::Memory(mem) => mem.create_user(user).await,
        }
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        match self {
            Self::Postgres(pool) => users::get_user_by_username(pool, username).await,
            Self::Memory(mem) => Ok(mem.get_user_by_username(username).await),
        }
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        match self {
            Self::Postgres(pool) => users::get_user_by_id(pool, id).await,
            Self::Memory(mem) => Ok(mem.get_user_by_id(id).await),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        match self {
            Self::Postgres(pool) => users::list_users(pool).await,
            Self::Memory(mem) => Ok(mem.list_users().await),
        }
    }

    pub async fn count_users(&self) -> Result<u64, StoreError> {
        match self {
            Self::Postgres(pool) => users::count_users(pool).await,
            Self::Memory(mem) => Ok(mem.count_users().await),
        }
    }

    pub async fn create_note(&self, note: &Note) -> Result<Note, StoreError> {
        match self {
            Self::Postgres(pool) => notes_db::create_note(pool, note).await,
            Self::Memory(mem) => Ok(mem.create_note(note).await),
        }
    }

    /// Notes owned by `user_id`, most recently updated first
    pub async fn list_notes_for_owner(&self, user_id: Uuid) -> Result<Vec<Note>, StoreError> {
        match self {
            Self::Postgres(pool) => notes_db::list_notes_for_owner(pool, user_id).await,
            Self::Memory(mem) => Ok(mem.list_notes_for_owner(user_id).await),
        }
    }

    pub async fn get_note(&self, id: Uuid) -> Result<Option<Note>, StoreError> {
        match self {
            Self::Postgres(pool) => notes_db::get_note(pool, id).await,
            Self::Memory(mem) => Ok(mem.get_note(id).await),
        }
    }

    pub async fn update_note_content(
        &self,
        id: Uuid,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Note>, StoreError> {
        match self {
            Self::Postgres(pool) => notes_db::update_note_content(pool, id, content, now).await,
            Self::Memory(mem) => Ok(mem.update_note_content(id, content, now).await),
        }
    }

    pub async fn count_notes(&self) -> Result<u64, StoreError> {
        match self {
            Self::Postgres(pool) => notes_db::count_notes(pool).await,
            Self::Memory(mem) => Ok(mem.count_notes().await),
        }
    }
}

/**
 * Server Initialization
 *
 * This module builds the running application from a `ServerConfig` and
 * tears it down again on shutdown.
 *
 * # Initialization Process
 *
 * 1. Open storage: PostgreSQL (connect + migrate) when `DATABASE_URL` is set,
 *    memory otherwise
 * 2. Open the session store on the same backend
 * 3. Start the expired-session sweep (PostgreSQL only)
 * 4. Build the router
 *
 * # Shutdown
 *
 * `Application::shutdown` stops the sweep task and closes the pool. Call it
 * after `axum::serve` has drained in-flight requests.
 */

use std::time::Duration;

use axum::Router;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower_sessions::{ExpiredDeletion, MemoryStore};
use tower_sessions_sqlx_store::PostgresStore;

use crate::backend::db::{Database, StoreError};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// How often expired session records are purged
pub const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

/// A configured application, ready to serve
pub struct Application {
    /// Router with all routes and layers applied
    pub router: Router<()>,
    /// Shared state, kept for shutdown and for tests
    pub state: AppState,
    shutdown: CancellationToken,
    sweeper: Option<JoinHandle<()>>,
}

impl Application {
    /// Stop background tasks and close storage
    pub async fn shutdown(self) {
        tracing::info!("Shutting down CloudPad backend");
        self.shutdown.cancel();
        if let Some(sweeper) = self.sweeper {
            if let Err(e) = sweeper.await {
                tracing::warn!("Session sweep task ended abnormally: {}", e);
            }
        }
        self.state.db.close().await;
    }
}

/// Create and configure the Axum application
///
/// # Errors
///
/// A configured database that cannot be reached or migrated is fatal.
/// A missing `DATABASE_URL` is not: the server falls back to memory
/// storage and logs a warning.
pub async fn create_app(config: ServerConfig) -> Result<Application, StoreError> {
    tracing::info!("Initializing CloudPad backend server");
    tracing::debug!("Configuration: {:?}", config);

    let shutdown = CancellationToken::new();

    let (router, state, sweeper) = match config.database_url.clone() {
        Some(url) => {
            let db = Database::connect(&url).await?;
            let pool = db
                .pool()
                .cloned()
                .ok_or_else(|| StoreError::Sqlx(sqlx::Error::PoolClosed))?;

            let store = PostgresStore::new(pool);
            store.migrate().await?;
            tracing::info!("PostgreSQL session store ready");

            let sweeper = spawn_session_sweep(store.clone(), shutdown.clone());
            let state = AppState::new(db, config);
            (create_router(state.clone(), store), state, Some(sweeper))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory storage; data is lost on restart.");
            let state = AppState::new(Database::memory(), config);
            (create_router(state.clone(), MemoryStore::default()), state, None)
        }
    };

    tracing::info!("Router configured");

    Ok(Application {
        router,
        state,
        shutdown,
        sweeper,
    })
}

/// Periodically delete expired session records until cancelled
fn spawn_session_sweep<S>(store: S, shutdown: CancellationToken) -> JoinHandle<()>
where
    S: ExpiredDeletion + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = interval.tick() => {
                    match store.delete_expired().await {
                        Ok(()) => tracing::debug!("Deleted expired sessions"),
                        Err(e) => tracing::error!("Failed to delete expired sessions: {}", e),
                    }
                }
            }
        }
        tracing::debug!("Session sweep stopped");
    })
}

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

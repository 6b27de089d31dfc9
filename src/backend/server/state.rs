/**
 * Application State Management
 *
 * `AppState` is the single process-wide state object. It is built once in
 * `create_app` and handed to every handler through Axum's `State`
 * extractor; nothing is kept in globals.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part they
 * need, e.g. `State(db): State<Database>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::db::Database;
use crate::backend::server::config::ServerConfig;

/// Shared application state
///
/// # Fields
///
/// * `db` - Credential and note store
/// * `config` - Server configuration, read-only after startup
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(db: Database, config: ServerConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

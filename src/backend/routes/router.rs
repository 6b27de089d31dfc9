/**
 * Router Configuration
 *
 * Combines all route groups into a single Axum router and wraps it in the
 * session and trace layers.
 *
 * # Layer Order (outermost first)
 *
 * 1. `TraceLayer` - one span per request
 * 2. `SessionManagerLayer` - loads the session behind `cloudpad.sid`
 * 3. Route guards (`require_login`, `require_admin`) on their groups
 */

use axum::Router;
use tower_http::trace::TraceLayer;
use tower_sessions::SessionStore;

use crate::backend::auth::sessions::session_layer;
use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{
    configure_admin_routes, configure_note_routes, configure_public_routes,
};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Storage handle and configuration
/// * `session_store` - Where session records live (PostgreSQL or memory)
///
/// # Fallback
///
/// Unknown routes get a JSON 404, a known route with the wrong method a
/// JSON 405.
pub fn create_router<S>(app_state: AppState, session_store: S) -> Router<()>
where
    S: SessionStore + Clone,
{
    let sessions = session_layer(session_store, &app_state.config);

    let router = Router::new();
    let router = configure_public_routes(router);
    let router = configure_note_routes(router);
    let router = configure_admin_routes(router);

    router
        .fallback(|| async { BackendError::not_found("Not found") })
        .method_not_allowed_fallback(|| async { BackendError::MethodNotAllowed })
        .layer(sessions)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

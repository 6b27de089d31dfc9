/**
 * API Route Groups
 *
 * # Routes
 *
 * ## Public
 * - `GET /` - Liveness banner
 * - `POST /register` - User registration
 * - `POST /login` - User login
 * - `GET /logout` - Destroy session, redirect to `/login.html`
 *
 * ## Login required
 * - `GET /me` - Current username
 * - `GET /notes` - Caller's notes
 * - `POST /notes/new` - Create a note
 * - `POST /save` - Save note content
 *
 * ## Admin only
 * - `GET /admin/users` - All users, without passwords
 * - `GET /admin/stats` - User and note totals
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::admin;
use crate::backend::auth::{get_me, login, logout, register};
use crate::backend::middleware::{require_admin, require_login};
use crate::backend::notes::{create_note, list_notes, save_note};
use crate::backend::server::state::AppState;

/// Plain-text body of `GET /`
pub const LIVENESS_BANNER: &str = "CloudPad backend is LIVE";

/// Routes that need no session
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(|| async { LIVENESS_BANNER }))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", get(logout))
}

/// Routes behind the login guard
pub fn configure_note_routes(router: Router<AppState>) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(get_me))
        .route("/notes", get(list_notes))
        .route("/notes/new", post(create_note))
        .route("/save", post(save_note))
        .route_layer(middleware::from_fn(require_login));

    router.merge(protected)
}

/// Routes behind the login guard and the admin guard
///
/// Layers added later run first, so `require_login` populates the
/// identity before `require_admin` reads it.
pub fn configure_admin_routes(router: Router<AppState>) -> Router<AppState> {
    let admin = Router::new()
        .route("/admin/users", get(admin::list_users))
        .route("/admin/stats", get(admin::stats))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn(require_login));

    router.merge(admin)
}

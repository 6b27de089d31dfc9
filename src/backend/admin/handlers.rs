/**
 * Admin Handlers
 *
 * Behind both the login guard and the admin guard.
 *
 * - GET /admin/users - every user, without password hashes
 * - GET /admin/stats - user and note totals
 */

use axum::{extract::State, response::Json};

use crate::backend::db::Database;
use crate::backend::error::BackendError;
use crate::shared::{StatsResponse, UserInfo};

/// List users handler
pub async fn list_users(State(db): State<Database>) -> Result<Json<Vec<UserInfo>>, BackendError> {
    let users = db.list_users().await?;
    Ok(Json(users.iter().map(|user| user.info()).collect()))
}

/// Stats handler
///
/// # Example Response
///
/// ```json
/// { "totalUsers": 3, "totalNotes": 12 }
/// ```
pub async fn stats(State(db): State<Database>) -> Result<Json<StatsResponse>, BackendError> {
    let total_users = db.count_users().await?;
    let total_notes = db.count_notes().await?;

    Ok(Json(StatsResponse {
        total_users,
        total_notes,
    }))
}

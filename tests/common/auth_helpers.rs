//! Authentication test helpers
//!
//! Shortcuts for getting a logged-in session.

use axum::http::StatusCode;
use serde_json::json;

use super::http::{TestApp, TestSession};

pub const TEST_PASSWORD: &str = "pw1";

/// Register `username` and return the logged-in session
pub async fn register_user(app: &TestApp, username: &str) -> TestSession {
    let mut session = app.session();
    let response = session
        .post_json(
            "/register",
            json!({ "username": username, "password": TEST_PASSWORD }),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::OK,
        "register {} failed: {}",
        username,
        response.text()
    );
    session
}

/// Log in an existing user on a fresh session
pub async fn login_user(app: &TestApp, username: &str, password: &str) -> TestSession {
    let mut session = app.session();
    let response = session
        .post_json(
            "/login",
            json!({ "username": username, "password": password }),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::OK,
        "login {} failed: {}",
        username,
        response.text()
    );
    session
}

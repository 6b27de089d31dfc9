//! Admin API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use cloudpad::shared::{StatsResponse, UserInfo};

use crate::common::{register_user, TestApp};
use crate::{assert_error_message, assert_status};

#[tokio::test]
async fn test_admin_routes_require_login() {
    let app = TestApp::with_admins(&["root"]).await;
    let mut anonymous = app.session();

    for path in ["/admin/users", "/admin/stats"] {
        let response = anonymous.get(path).await;
        assert_status!(response, StatusCode::UNAUTHORIZED);
        assert_error_message!(response, "Not logged in");
    }
}

#[tokio::test]
async fn test_admin_routes_reject_regular_users() {
    let app = TestApp::with_admins(&["root"]).await;
    let mut alice = register_user(&app, "alice").await;

    for path in ["/admin/users", "/admin/stats"] {
        let response = alice.get(path).await;
        assert_status!(response, StatusCode::FORBIDDEN);
        assert_error_message!(response, "Admin access required");
    }
}

#[tokio::test]
async fn test_list_users_hides_password_hashes() {
    let app = TestApp::with_admins(&["root"]).await;
    let mut root = register_user(&app, "root").await;
    register_user(&app, "alice").await;

    let response = root.get("/admin/users").await;
    assert_status!(response, StatusCode::OK);

    let raw: Value = response.json();
    let users = raw.as_array().expect("array of users");
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("passwordHash").is_none(), "leaked hash: {}", user);
        assert!(user.get("password_hash").is_none(), "leaked hash: {}", user);
        assert!(user.get("password").is_none(), "leaked password: {}", user);
    }
    assert!(!response.text().contains("$2"), "bcrypt hash in body");

    let mut users: Vec<UserInfo> = response.json();
    users.sort_by(|a, b| a.username.cmp(&b.username));
    assert_eq!(users[0].username, "alice");
    assert!(!users[0].is_admin);
    assert_eq!(users[1].username, "root");
    assert!(users[1].is_admin);
}

#[tokio::test]
async fn test_stats_counts_users_and_notes() {
    let app = TestApp::with_admins(&["root"]).await;
    let mut root = register_user(&app, "root").await;
    let mut alice = register_user(&app, "alice").await;

    alice.post("/notes/new").await;
    alice.post("/notes/new").await;
    root.post("/notes/new").await;

    let response = root.get("/admin/stats").await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "totalUsers": 2, "totalNotes": 3 })
    );

    let stats: StatsResponse = response.json();
    assert_eq!(stats.total_users, 2);
}

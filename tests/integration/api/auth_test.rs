//! Authentication API integration tests
//!
//! Register, login, me, and logout against the full router.

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{login_user, register_user, TestApp, TEST_PASSWORD};
use crate::{assert_contains, assert_error_message, assert_status};

#[tokio::test]
async fn test_root_banner() {
    let app = TestApp::new().await;
    let response = app.session().get("/").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.text(), "CloudPad backend is LIVE");
}

#[tokio::test]
async fn test_register_sets_session_cookie() {
    let app = TestApp::new().await;
    let mut session = app.session();

    let response = session
        .post_json("/register", json!({ "username": "alice", "password": "pw1" }))
        .await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), json!({ "success": true }));

    let set_cookie = response.session_set_cookie().expect("session cookie");
    assert_contains!(set_cookie, "HttpOnly");
    assert_contains!(set_cookie, "SameSite=Lax");
    assert_contains!(set_cookie, "Path=/");
    assert_contains!(set_cookie, "Max-Age=86400");

    let me = session.get("/me").await;
    assert_status!(me, StatusCode::OK);
    assert_eq!(me.json::<serde_json::Value>(), json!({ "username": "alice" }));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;
    register_user(&app, "alice").await;

    let response = app
        .session()
        .post_json("/register", json!({ "username": "alice", "password": "other" }))
        .await;

    assert_status!(response, StatusCode::CONFLICT);
    assert_error_message!(response, "User already exists");
    assert_eq!(app.db().count_users().await.unwrap(), 1);
}

#[tokio::test]
async fn test_register_trims_username() {
    let app = TestApp::new().await;
    register_user(&app, "  alice ").await;

    let mut session = login_user(&app, "alice", TEST_PASSWORD).await;
    let me = session.get("/me").await;
    assert_eq!(me.json::<serde_json::Value>()["username"], "alice");
}

#[tokio::test]
async fn test_register_rejects_invalid_input() {
    let app = TestApp::new().await;
    let mut session = app.session();

    let blank = session
        .post_json("/register", json!({ "username": "   ", "password": "pw" }))
        .await;
    assert_status!(blank, StatusCode::BAD_REQUEST);

    let spaced = session
        .post_json("/register", json!({ "username": "al ice", "password": "pw" }))
        .await;
    assert_status!(spaced, StatusCode::BAD_REQUEST);

    let no_password = session
        .post_json("/register", json!({ "username": "alice", "password": "" }))
        .await;
    assert_status!(no_password, StatusCode::BAD_REQUEST);

    assert_eq!(app.db().count_users().await.unwrap(), 0);
    assert!(session.cookie().is_none());
}

#[tokio::test]
async fn test_register_rejects_non_json_body() {
    let app = TestApp::new().await;
    let mut session = app.session();

    let response = session.post("/register").await;
    assert_status!(response, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 415);
    assert!(body["error"].is_string(), "error body: {}", body);

    let wrong_shape = session
        .post_json("/register", json!({ "username": 42, "password": "pw" }))
        .await;
    assert_status!(wrong_shape, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(wrong_shape.json::<serde_json::Value>()["status"], 422);

    assert_eq!(app.db().count_users().await.unwrap(), 0);
}

#[tokio::test]
async fn test_wrong_method_is_json_405() {
    let app = TestApp::new().await;
    let response = app.session().get("/login").await;

    assert_status!(response, StatusCode::METHOD_NOT_ALLOWED);
    assert_error_message!(response, "Method not allowed");
}

#[tokio::test]
async fn test_login_reports_admin_flag() {
    let app = TestApp::with_admins(&["root"]).await;
    register_user(&app, "alice").await;
    register_user(&app, "root").await;

    let alice = app
        .session()
        .post_json("/login", json!({ "username": "alice", "password": TEST_PASSWORD }))
        .await;
    assert_status!(alice, StatusCode::OK);
    assert_eq!(
        alice.json::<serde_json::Value>(),
        json!({ "success": true, "isAdmin": false })
    );

    let root = app
        .session()
        .post_json("/login", json!({ "username": "root", "password": TEST_PASSWORD }))
        .await;
    assert_eq!(root.json::<serde_json::Value>()["isAdmin"], true);
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::new().await;
    let mut session = app.session();

    let response = session
        .post_json("/login", json!({ "username": "ghost", "password": "pw" }))
        .await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_error_message!(response, "Invalid user");
    assert!(response.session_set_cookie().is_none());
}

#[tokio::test]
async fn test_wrong_password_leaves_session_untouched() {
    let app = TestApp::new().await;
    register_user(&app, "alice").await;
    register_user(&app, "bob").await;

    let mut session = login_user(&app, "alice", TEST_PASSWORD).await;
    let cookie_before = session.cookie().map(str::to_string);

    let response = session
        .post_json("/login", json!({ "username": "bob", "password": "wrong" }))
        .await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_error_message!(response, "Wrong password");
    assert!(response.session_set_cookie().is_none());

    assert_eq!(session.cookie().map(str::to_string), cookie_before);
    let me = session.get("/me").await;
    assert_eq!(me.json::<serde_json::Value>()["username"], "alice");
}

#[tokio::test]
async fn test_login_regenerates_session_id() {
    let app = TestApp::new().await;
    let mut session = register_user(&app, "alice").await;
    let old_cookie = session.cookie().map(str::to_string);

    let response = session
        .post_json("/login", json!({ "username": "alice", "password": TEST_PASSWORD }))
        .await;
    assert_status!(response, StatusCode::OK);

    let new_cookie = session.cookie().map(str::to_string);
    assert!(new_cookie.is_some());
    assert_ne!(new_cookie, old_cookie);

    // The pre-login id no longer authenticates
    let mut replay = app.session();
    replay.set_cookie(old_cookie);
    assert_status!(replay.get("/me").await, StatusCode::UNAUTHORIZED);

    assert_status!(session.get("/me").await, StatusCode::OK);
}

#[tokio::test]
async fn test_me_requires_login() {
    let app = TestApp::new().await;
    let response = app.session().get("/me").await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_error_message!(response, "Not logged in");
}

#[tokio::test]
async fn test_forged_cookie_is_rejected() {
    let app = TestApp::new().await;
    let mut session = app.session();
    session.set_cookie(Some("cloudpad.sid=not-a-real-session".to_string()));

    assert_status!(session.get("/notes").await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_destroys_session() {
    let app = TestApp::new().await;
    let mut session = register_user(&app, "alice").await;
    let old_cookie = session.cookie().map(str::to_string);
    assert_status!(session.get("/notes").await, StatusCode::OK);

    let response = session.get("/logout").await;
    assert!(response.status.is_redirection(), "status {}", response.status);
    assert_eq!(response.headers[header::LOCATION], "/login.html");
    assert!(session.cookie().is_none());

    // Replaying the old token fails too
    let mut replay = app.session();
    replay.set_cookie(old_cookie);
    let notes = replay.get("/notes").await;
    assert_status!(notes, StatusCode::UNAUTHORIZED);
    assert_error_message!(notes, "Not logged in");
}

#[tokio::test]
async fn test_logout_without_session() {
    let app = TestApp::new().await;
    let response = app.session().get("/logout").await;

    assert!(response.status.is_redirection());
    assert_eq!(response.headers[header::LOCATION], "/login.html");
}

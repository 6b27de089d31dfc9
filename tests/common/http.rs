//! In-process HTTP helpers
//!
//! `TestApp` builds the real router on memory storage. Each `TestSession`
//! is one browser: it remembers the `cloudpad.sid` cookie the server sets
//! and sends it back on later requests.

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use cloudpad::backend::server::{create_app, AppState, ServerConfig};
use cloudpad::backend::Database;

pub const COOKIE_NAME: &str = "cloudpad.sid";

/// The full application on memory storage
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(ServerConfig::for_testing()).await
    }

    /// App where the given usernames become admins when they register
    pub async fn with_admins(admins: &[&str]) -> Self {
        let mut config = ServerConfig::for_testing();
        config.admin_usernames = admins.iter().map(|s| s.to_string()).collect();
        Self::with_config(config).await
    }

    pub async fn with_config(config: ServerConfig) -> Self {
        let app = create_app(config).await.expect("failed to build test app");
        Self {
            router: app.router.clone(),
            state: app.state.clone(),
        }
    }

    pub fn db(&self) -> &Database {
        &self.state.db
    }

    /// A new client with an empty cookie jar
    pub fn session(&self) -> TestSession {
        TestSession {
            router: self.router.clone(),
            cookie: None,
        }
    }
}

/// A buffered response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("invalid JSON ({}): {}", e, self.text()))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The raw `Set-Cookie` header for the session cookie, if any
    pub fn session_set_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with(&format!("{}=", COOKIE_NAME)))
            .map(str::to_string)
    }
}

/// One client with its own cookie jar
pub struct TestSession {
    router: Router,
    cookie: Option<String>,
}

impl TestSession {
    /// Current `name=value` cookie pair
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    /// Replace the stored cookie, e.g. to replay an old one
    pub fn set_cookie(&mut self, cookie: Option<String>) {
        self.cookie = cookie;
    }

    pub async fn get(&mut self, path: &str) -> TestResponse {
        self.send(Method::GET, path, None).await
    }

    pub async fn post(&mut self, path: &str) -> TestResponse {
        self.send(Method::POST, path, None).await
    }

    pub async fn post_json(&mut self, path: &str, body: serde_json::Value) -> TestResponse {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn send(
        &mut self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        let response = TestResponse {
            status,
            headers,
            body,
        };
        self.remember_cookie(&response);
        response
    }

    fn remember_cookie(&mut self, response: &TestResponse) {
        let Some(set_cookie) = response.session_set_cookie() else {
            return;
        };
        let pair = set_cookie.split(';').next().unwrap_or_default().trim();
        let expired = pair.ends_with('=')
            || set_cookie.contains("Max-Age=0")
            || set_cookie.contains("Expires=Thu, 01 Jan 1970");
        self.cookie = if expired {
            None
        } else {
            Some(pair.to_string())
        };
    }
}

//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use presence_server::application::services::PresenceService;
use presence_server::config::Settings;
use presence_server::shared::clock::ManualClock;
use presence_server::startup::{build_router, AppState};

/// Test application builder
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Create a test application with the default idle timeout
    pub async fn new() -> Self {
        let settings = Settings::defaults("test").expect("default settings");
        let idle_timeout = settings.presence.idle_timeout();
        Self::build(settings, idle_timeout)
    }

    /// Create a test application with a custom idle timeout
    pub async fn with_idle_timeout(idle_timeout: Duration) -> Self {
        let settings = Settings::defaults("test").expect("default settings");
        Self::build(settings, idle_timeout)
    }

    fn build(settings: Settings, idle_timeout: Duration) -> Self {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let presence = PresenceService::with_clock(idle_timeout, clock.clone());
        let state = AppState::with_presence(settings, presence);
        let router = build_router(state.clone());

        Self {
            router,
            state,
            clock,
        }
    }

    /// Move the synthetic clock forward
    pub fn advance(&self, duration: Duration) {
        self.clock
            .advance(chrono::Duration::from_std(duration).expect("duration in range"));
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> axum::response::Response {
        self.post_raw(uri, Some("application/json"), body).await
    }

    /// Make a POST request with an arbitrary (or no) content type
    pub async fn post_raw(
        &self,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> axum::response::Response {
        let mut request = Request::builder().method("POST").uri(uri);
        if let Some(content_type) = content_type {
            request = request.header("Content-Type", content_type);
        }

        self.router
            .clone()
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    /// POST a presence event and return status and JSON body
    pub async fn presence(&self, user_id: &str, session_id: &str, action: &str) -> (StatusCode, Value) {
        let body = serde_json::json!({
            "userId": user_id,
            "sessionId": session_id,
            "action": action,
        });
        let response = self.post_json(PRESENCE_PATH, &body.to_string()).await;
        read_json(response).await
    }

    /// GET the current counts and return status and JSON body
    pub async fn online(&self) -> (StatusCode, Value) {
        let response = self.get(PRESENCE_PATH).await;
        read_json(response).await
    }
}

pub const PRESENCE_PATH: &str = "/api/v1/users";

/// Split a response into status and parsed JSON body
pub async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Generate a unique session id
pub fn unique_session() -> String {
    format!("session_{}", uuid::Uuid::new_v4())
}

/// Generate a unique user id
pub fn unique_user() -> String {
    format!("user_{}", &uuid::Uuid::new_v4().to_string()[..8])
}

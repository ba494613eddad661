//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{read_json, TestApp};

/// Test basic health check endpoint returns 200 OK
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new().await;

    let (status, body) = read_json(app.get("/health").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body.get("version").is_some());
}

/// Test liveness endpoint
#[tokio::test]
async fn test_liveness_endpoint() {
    let app = TestApp::new().await;

    let (status, body) = read_json(app.get("/health/live").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");
}

/// Test readiness endpoint reports presence counts
#[tokio::test]
async fn test_readiness_endpoint() {
    let app = TestApp::new().await;
    app.presence("alice", "s1", "join").await;
    app.presence("alice", "s2", "join").await;

    let (status, body) = read_json(app.get("/health/ready").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["presence"]["online_users"], 1);
    assert_eq!(body["checks"]["presence"]["total_sessions"], 2);
}

/// Test metrics endpoint exposes presence gauges
#[tokio::test]
async fn test_metrics_endpoint() {
    let app = TestApp::new().await;
    app.presence("alice", "s1", "join").await;

    let response = app.get("/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("presence_server_presence_sessions"));
    assert!(text.contains("presence_server_http_requests_total"));
}

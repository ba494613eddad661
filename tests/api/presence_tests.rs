//! Presence API Tests

use std::time::Duration;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{read_json, unique_session, unique_user, TestApp, PRESENCE_PATH};

/// Empty tracker reports zero
#[tokio::test]
async fn test_get_on_fresh_server_is_empty() {
    let app = TestApp::new().await;

    let (status, body) = app.online().await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"onlineUsers": 0, "totalSessions": 0}));
}

/// Two tabs of the same user count as one online user
#[tokio::test]
async fn test_same_user_two_sessions_counts_once() {
    let app = TestApp::new().await;

    let (status, body) = app.presence("alice", "s1", "join").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "onlineUsers": 1, "totalSessions": 1, "action": "join"})
    );

    app.presence("alice", "s2", "join").await;

    let (status, body) = app.online().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"onlineUsers": 1, "totalSessions": 2}));
}

/// A session without heartbeats disappears after the idle timeout
#[tokio::test]
async fn test_idle_session_expires() {
    let app = TestApp::new().await;

    app.presence("bob", "s3", "join").await;
    app.advance(Duration::from_secs(5 * 60 + 1));

    let (_, body) = app.online().await;
    assert_eq!(body, json!({"onlineUsers": 0, "totalSessions": 0}));
}

/// Heartbeats inside the timeout keep the session online
#[tokio::test]
async fn test_heartbeat_keeps_session_online() {
    let app = TestApp::with_idle_timeout(Duration::from_secs(60)).await;

    app.presence("dave", "s5", "join").await;
    for _ in 0..5 {
        app.advance(Duration::from_secs(45));
        let (status, body) = app.presence("dave", "s5", "heartbeat").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalSessions"], 1);
        assert_eq!(body["action"], "heartbeat");
    }

    app.advance(Duration::from_secs(61));
    let (_, body) = app.online().await;
    assert_eq!(body, json!({"onlineUsers": 0, "totalSessions": 0}));
}

/// Leave removes the session immediately
#[tokio::test]
async fn test_leave_removes_session() {
    let app = TestApp::new().await;

    app.presence("carol", "s4", "join").await;
    let (status, body) = app.presence("carol", "s4", "leave").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "onlineUsers": 0, "totalSessions": 0, "action": "leave"})
    );

    let (_, body) = app.online().await;
    assert_eq!(body, json!({"onlineUsers": 0, "totalSessions": 0}));
}

/// Leaving an unknown session succeeds without changing counts
#[tokio::test]
async fn test_leave_unknown_session_is_noop() {
    let app = TestApp::new().await;
    app.presence("alice", "s1", "join").await;

    let (status, body) = app.presence("alice", "never-joined", "leave").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalSessions"], 1);
}

/// Heartbeat for an unknown session registers it
#[tokio::test]
async fn test_heartbeat_registers_unknown_session() {
    let app = TestApp::new().await;

    let (status, body) = app.presence(&unique_user(), &unique_session(), "heartbeat").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["onlineUsers"], 1);
    assert_eq!(body["totalSessions"], 1);
}

/// Unknown action is rejected and does not change state
#[tokio::test]
async fn test_invalid_action_rejected() {
    let app = TestApp::new().await;
    app.presence("alice", "s1", "join").await;

    let (status, body) = app.presence("alice", "s2", "dance").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Invalid action. Use: join, heartbeat, or leave"})
    );

    let (_, body) = app.online().await;
    assert_eq!(body, json!({"onlineUsers": 1, "totalSessions": 1}));
}

/// Missing identifiers are rejected and do not change state
#[tokio::test]
async fn test_missing_identifiers_rejected() {
    let app = TestApp::new().await;

    let bodies = [
        json!({"sessionId": "s1", "action": "join"}),
        json!({"userId": "alice", "action": "join"}),
        json!({"userId": "", "sessionId": "s1", "action": "join"}),
        json!({"userId": "alice", "sessionId": "", "action": "join"}),
        json!({"userId": null, "sessionId": null, "action": "dance"}),
        json!({}),
    ];

    for body in bodies {
        let response = app.post_json(PRESENCE_PATH, &body.to_string()).await;
        let (status, json) = read_json(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(json, json!({"error": "userId and sessionId are required"}));
    }

    let (_, body) = app.online().await;
    assert_eq!(body, json!({"onlineUsers": 0, "totalSessions": 0}));
}

/// Omitted action is treated as a heartbeat
#[tokio::test]
async fn test_omitted_action_is_heartbeat() {
    let app = TestApp::new().await;

    let body = json!({"userId": "erin", "sessionId": "s6"});
    let response = app.post_json(PRESENCE_PATH, &body.to_string()).await;
    let (status, json) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({"success": true, "onlineUsers": 1, "totalSessions": 1, "action": "heartbeat"})
    );
}

/// Body that is not valid JSON is rejected with the API error shape
#[tokio::test]
async fn test_malformed_body_rejected() {
    let app = TestApp::new().await;

    let response = app.post_json(PRESENCE_PATH, "{not json").await;
    let (status, json) = read_json(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "Invalid request body"}));
}

/// Non-string actions are reported as invalid actions, not as bad bodies
#[tokio::test]
async fn test_non_string_action_rejected_as_invalid_action() {
    let app = TestApp::new().await;

    for action in [json!(5), json!(false), json!(["join"])] {
        let body = json!({"userId": "alice", "sessionId": "s1", "action": action});
        let response = app.post_json(PRESENCE_PATH, &body.to_string()).await;
        let (status, json) = read_json(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            json!({"error": "Invalid action. Use: join, heartbeat, or leave"})
        );
    }

    let (_, body) = app.online().await;
    assert_eq!(body["totalSessions"], 0);
}

/// Numeric identifiers are tracked by their decimal text
#[tokio::test]
async fn test_numeric_user_id_is_counted() {
    let app = TestApp::new().await;

    let body = json!({"userId": 42, "sessionId": "s1", "action": "join"});
    let response = app.post_json(PRESENCE_PATH, &body.to_string()).await;
    let (status, json) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["onlineUsers"], 1);

    // The same user sent as a string shares the count
    let (_, json) = app.presence("42", "s2", "join").await;
    assert_eq!(json["onlineUsers"], 1);
    assert_eq!(json["totalSessions"], 2);
}

/// Falsy identifiers count as missing
#[tokio::test]
async fn test_falsy_identifiers_rejected() {
    let app = TestApp::new().await;

    let body = json!({"userId": 0, "sessionId": false, "action": "join"});
    let response = app.post_json(PRESENCE_PATH, &body.to_string()).await;
    let (status, json) = read_json(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "userId and sessionId are required"}));
}

/// Content type is not checked; the unload beacon posts text/plain
#[tokio::test]
async fn test_text_plain_leave_is_accepted() {
    let app = TestApp::new().await;
    app.presence("alice", "s1", "join").await;

    let body = json!({"userId": "alice", "sessionId": "s1", "action": "leave"});
    let response = app
        .post_raw(PRESENCE_PATH, Some("text/plain;charset=UTF-8"), &body.to_string())
        .await;
    let (status, json) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({"success": true, "onlineUsers": 0, "totalSessions": 0, "action": "leave"})
    );
}

/// A body without any content type is parsed as JSON too
#[tokio::test]
async fn test_body_without_content_type_is_accepted() {
    let app = TestApp::new().await;

    let body = json!({"userId": "bob", "sessionId": "s1", "action": "join"});
    let response = app.post_raw(PRESENCE_PATH, None, &body.to_string()).await;
    let (status, json) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalSessions"], 1);
}

/// Each test app owns an independent tracker
#[tokio::test]
async fn test_apps_do_not_share_state() {
    let first = TestApp::new().await;
    let second = TestApp::new().await;

    first.presence("alice", "s1", "join").await;

    let (_, body) = second.online().await;
    assert_eq!(body["totalSessions"], 0);
}

#![allow(clippy::unwrap_used)]
//! Wire-level tests for the HTTP backend.
//!
//! These run the real client against a scripted local server and check the
//! exact paths, methods, and JSON bodies that go over the wire.

mod common;

use chatloop_cli::api::{ApiError, ChatBackend, HttpBackend, Reward};
use chatloop_cli::session::SessionId;
use common::{ScriptedServer, closed_endpoint};
use serde_json::json;

fn backend(endpoint: &str) -> HttpBackend {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpBackend::with_client(endpoint, client).unwrap()
}

fn session() -> SessionId {
    SessionId::parse("sess_wire00001").unwrap()
}

#[tokio::test]
async fn test_chat_posts_input_and_session() {
    let server = ScriptedServer::start(vec![(
        "200 OK",
        json!({"response": "Hi there!"}).to_string(),
    )])
    .await;

    let reply = backend(&server.endpoint)
        .chat(&session(), "Hello")
        .await
        .unwrap();

    assert_eq!(reply.response, "Hi there!");

    let requests = server.finish().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/chat/");
    assert_eq!(
        requests[0].json(),
        json!({"user_input": "Hello", "session_id": "sess_wire00001"})
    );
}

#[tokio::test]
async fn test_chat_reply_with_backend_extras() {
    let server = ScriptedServer::start(vec![(
        "200 OK",
        json!({
            "session_id": "3f1c0e52-uuid",
            "response": "Paris.",
            "explanation": {"shap_values": [0.4, 0.1]},
            "chat_history": [],
        })
        .to_string(),
    )])
    .await;

    let reply = backend(&server.endpoint)
        .chat(&session(), "Capital of France?")
        .await
        .unwrap();

    assert_eq!(reply.response, "Paris.");
    assert_eq!(
        reply.explanation,
        Some(json!({"shap_values": [0.4, 0.1]}))
    );
    server.finish().await;
}

#[tokio::test]
async fn test_chat_server_error_is_status_error() {
    let server = ScriptedServer::start(vec![(
        "500 Internal Server Error",
        json!({"detail": "Failed to process request"}).to_string(),
    )])
    .await;

    let err = backend(&server.endpoint)
        .chat(&session(), "Hello")
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("Failed to process request"));
        }
        other => panic!("Expected ApiError::Status, got {other:?}"),
    }
    server.finish().await;
}

#[tokio::test]
async fn test_chat_malformed_body_is_decode_error() {
    let server = ScriptedServer::start(vec![("200 OK", "<html>oops</html>".to_string())]).await;

    let err = backend(&server.endpoint)
        .chat(&session(), "Hello")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
    server.finish().await;
}

#[tokio::test]
async fn test_chat_missing_response_field_is_decode_error() {
    let server =
        ScriptedServer::start(vec![("200 OK", json!({"answer": "Hi"}).to_string())]).await;

    let err = backend(&server.endpoint)
        .chat(&session(), "Hello")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
    server.finish().await;
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let endpoint = closed_endpoint().await;

    let err = backend(&endpoint)
        .chat(&session(), "Hello")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
}

#[tokio::test]
async fn test_feedback_posts_integer_reward() {
    let server = ScriptedServer::start(vec![
        ("200 OK", json!({"message": "Feedback received. Thank you!"}).to_string()),
        ("200 OK", String::new()),
    ])
    .await;
    let backend = backend(&server.endpoint);

    backend.feedback(&session(), Reward::Positive).await.unwrap();
    backend.feedback(&session(), Reward::Negative).await.unwrap();

    let requests = server.finish().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/feedback/");
    assert_eq!(
        requests[0].json(),
        json!({"session_id": "sess_wire00001", "reward": 1})
    );
    assert_eq!(
        requests[1].json(),
        json!({"session_id": "sess_wire00001", "reward": -1})
    );
}

#[tokio::test]
async fn test_feedback_rejected_status_is_error() {
    let server = ScriptedServer::start(vec![(
        "404 Not Found",
        json!({"detail": "Session not found"}).to_string(),
    )])
    .await;

    let result = backend(&server.endpoint)
        .feedback(&session(), Reward::Negative)
        .await;

    assert!(matches!(result, Err(ApiError::Status { .. })));
    server.finish().await;
}

#[tokio::test]
async fn test_clear_history_deletes_session_path() {
    let server = ScriptedServer::start(vec![(
        "200 OK",
        json!({"message": "Chat history cleared successfully."}).to_string(),
    )])
    .await;

    let message = backend(&server.endpoint)
        .clear_history(&session())
        .await
        .unwrap();

    assert_eq!(message, "Chat history cleared successfully.");
    let requests = server.finish().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/clear_chat/sess_wire00001");
}

#[tokio::test]
async fn test_health_gets_root() {
    let server = ScriptedServer::start(vec![(
        "200 OK",
        json!({"message": "Backend server is running"}).to_string(),
    )])
    .await;

    let message = backend(&server.endpoint).health().await.unwrap();

    assert_eq!(message, "Backend server is running");
    let requests = server.finish().await;
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/");
}

#[tokio::test]
async fn test_endpoint_with_base_path() {
    let server =
        ScriptedServer::start(vec![("200 OK", json!({"response": "ok"}).to_string())]).await;
    let endpoint = format!("{}/api/bot", server.endpoint);

    backend(&endpoint).chat(&session(), "Hello").await.unwrap();

    let requests = server.finish().await;
    assert_eq!(requests[0].path, "/api/bot/chat/");
}

//! API Integration Tests
//!
//! Every test runs against an in-memory store, except those in the
//! `postgres` section, which need a running PostgreSQL and `DATABASE_URL`.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use futures::future::join_all;
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

async fn create(server: &TestServer, request: &CreateThought) -> Thought {
    let response = server.post("/thoughts", request).await.unwrap();
    let envelope: Envelope<Thought> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(envelope.success);
    envelope.response
}

async fn list(server: &TestServer) -> Vec<Thought> {
    let response = server.get("/thoughts").await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn rejected(response: reqwest::Response) -> ErrorBody {
    let envelope: Envelope<ErrorBody> = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert!(!envelope.success);
    envelope.response
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    server.memory_repo().set_available(false);
    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
}

#[tokio::test]
async fn test_route_listing() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/").await.unwrap();
    let routes: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(routes
        .iter()
        .any(|r| r["path"] == "/thoughts/:thought_id/like" && r["methods"] == json!(["POST"])));
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_example_thought() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post(
            "/thoughts",
            &json!({"message": "Hello world!", "tag": "Food", "name": "Ada"}),
        )
        .await
        .unwrap();

    let body: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body["success"], true);

    let thought = &body["response"];
    assert_eq!(thought["message"], "Hello world!");
    assert_eq!(thought["tag"], "Food");
    assert_eq!(thought["name"], "Ada");
    assert_eq!(thought["hearts"], 0);
    assert!(thought["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(thought["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_then_list_includes_thought() {
    let server = TestServer::start().await.unwrap();

    for tag in ["Family", "Pets", "Work/School", "Love", "Food", "Exercise"] {
        let request = CreateThought::new(format!("Thinking about {tag}"), tag, "Ada");
        let created = create(&server, &request).await;

        let listed = list(&server).await;
        let found = listed
            .iter()
            .find(|t| t.id == created.id)
            .expect("created thought should be listed");
        assert_eq!(found.hearts, 0);
        assert_eq!(found.tag, tag);
    }
}

#[tokio::test]
async fn test_create_trims_fields() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &CreateThought::new("   Spaced out   ", "Love", "  Ada  ")).await;

    assert_eq!(created.message, "Spaced out");
    assert_eq!(created.name, "Ada");
}

#[tokio::test]
async fn test_create_rejects_bad_message_length() {
    let server = TestServer::start().await.unwrap();
    let too_long = "x".repeat(141);

    for message in ["abcd", "    abcd    ", too_long.as_str()] {
        let response = server
            .post("/thoughts", &CreateThought::new(message, "Food", "Ada"))
            .await
            .unwrap();
        let error = rejected(response).await;

        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.details.unwrap().get("message").is_some());
    }

    assert!(list(&server).await.is_empty());
}

#[tokio::test]
async fn test_create_rejects_unknown_tag() {
    let server = TestServer::start().await.unwrap();

    for tag in ["Gaming", "food", "Work"] {
        let response = server
            .post("/thoughts", &CreateThought::new("Hello world!", tag, "Ada"))
            .await
            .unwrap();
        let error = rejected(response).await;

        let details = error.details.unwrap();
        assert_eq!(details["tag"][0]["code"], "enum");
    }

    assert!(list(&server).await.is_empty());
}

#[tokio::test]
async fn test_create_rejects_missing_fields() {
    let server = TestServer::start().await.unwrap();
    let response = server.post("/thoughts", &json!({})).await.unwrap();
    let error = rejected(response).await;

    let details = error.details.unwrap();
    for field in ["message", "tag", "name"] {
        assert_eq!(details[field][0]["code"], "required", "{field}");
    }
}

#[tokio::test]
async fn test_create_ignores_client_hearts() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post(
            "/thoughts",
            &json!({"message": "Cheating hearts", "tag": "Love", "name": "Ada", "hearts": 100}),
        )
        .await
        .unwrap();

    let envelope: Envelope<Thought> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(envelope.response.hearts, 0);
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let server = TestServer::start().await.unwrap();
    let response = server.post_raw("/thoughts", "{\"message\": ").await.unwrap();

    let error = rejected(response).await;
    assert_eq!(error.code, "INVALID_BODY");
    assert!(!error.message.is_empty());
}

#[tokio::test]
async fn test_create_store_failure_is_bad_request() {
    let server = TestServer::start().await.unwrap();
    server.memory_repo().set_available(false);

    let response = server.post("/thoughts", &CreateThought::unique()).await.unwrap();
    let error = rejected(response).await;
    assert_eq!(error.code, "DATABASE_ERROR");
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn test_list_is_capped_and_newest_first() {
    let server = TestServer::start().await.unwrap();

    let mut created = Vec::new();
    for _ in 0..25 {
        created.push(create(&server, &CreateThought::unique()).await);
    }

    let listed = list(&server).await;
    assert_eq!(listed.len(), 20);
    for pair in listed.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }

    let newest: Vec<&str> = created.iter().rev().take(20).map(|t| t.id.as_str()).collect();
    let listed_ids: Vec<&str> = listed.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(listed_ids, newest);
}

#[tokio::test]
async fn test_list_empty() {
    let server = TestServer::start().await.unwrap();
    assert!(list(&server).await.is_empty());
}

#[tokio::test]
async fn test_list_store_failure_is_server_error() {
    let server = TestServer::start().await.unwrap();
    server.memory_repo().set_available(false);

    let response = server.get("/thoughts").await.unwrap();
    let envelope: Envelope<ErrorBody> =
        assert_json(response, StatusCode::INTERNAL_SERVER_ERROR).await.unwrap();
    assert!(!envelope.success);
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_like_n_times() {
    let server = TestServer::start().await.unwrap();
    let thought = create(&server, &CreateThought::unique()).await;

    for expected in 1..=5 {
        let response = server
            .post_empty(&format!("/thoughts/{}/like", thought.id))
            .await
            .unwrap();
        let envelope: Envelope<Thought> = assert_json(response, StatusCode::OK).await.unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.response.hearts, expected);
        assert_eq!(envelope.response.id, thought.id);
    }
}

#[tokio::test]
async fn test_concurrent_likes() {
    let server = TestServer::start().await.unwrap();
    let thought = create(&server, &CreateThought::unique()).await;
    let path = format!("/thoughts/{}/like", thought.id);

    let responses = join_all((0..20).map(|_| server.post_empty(&path))).await;
    for response in responses {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    let listed = list(&server).await;
    assert_eq!(listed[0].hearts, 20);
}

#[tokio::test]
async fn test_like_invalid_and_unknown_ids() {
    let server = TestServer::start().await.unwrap();
    let thought = create(&server, &CreateThought::unique()).await;

    for (id, code) in [
        ("not-an-id", "INVALID_ID"),
        ("-5", "INVALID_ID"),
        ("999999999999", "DATABASE_ERROR"),
    ] {
        let response = server
            .post_empty(&format!("/thoughts/{id}/like"))
            .await
            .unwrap();
        let error = rejected(response).await;
        assert_eq!(error.code, code, "{id}");
    }

    let listed = list(&server).await;
    assert_eq!(listed[0].hearts, 0, "no record may be altered");
}

#[tokio::test]
async fn test_like_store_failure_is_bad_request() {
    let server = TestServer::start().await.unwrap();
    let thought = create(&server, &CreateThought::unique()).await;
    server.memory_repo().set_available(false);

    let response = server
        .post_empty(&format!("/thoughts/{}/like", thought.id))
        .await
        .unwrap();
    assert_eq!(rejected(response).await.code, "DATABASE_ERROR");
}

// ============================================================================
// PostgreSQL-backed Tests
// ============================================================================

#[tokio::test]
async fn test_postgres_create_like_list() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_postgres()
        .await
        .expect("Failed to start server");
    let thought = create(&server, &CreateThought::unique()).await;

    for _ in 0..3 {
        let response = server
            .post_empty(&format!("/thoughts/{}/like", thought.id))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let listed = list(&server).await;
    assert!(listed.len() <= 20);
    let stored = listed
        .iter()
        .find(|t| t.id == thought.id)
        .expect("new thought should be among the most recent");
    assert_eq!(stored.hearts, 3);
    assert_eq!(stored.created_at, thought.created_at);
}

#[tokio::test]
async fn test_postgres_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_postgres()
        .await
        .expect("Failed to start server");
    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

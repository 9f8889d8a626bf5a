//! Integration tests for the remote task store client against a mock server

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use serde_json::json;
use taskboard_api::{ApiError, TaskId, TasksClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn list_tasks_parses_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "a", "done": false},
            {"id": 2, "title": "b", "done": true},
        ])))
        .mount(&server)
        .await;

    let client = TasksClient::new(format!("{}/tasks", server.uri()));
    let tasks = client.list_tasks().await.unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, TaskId::new(1));
    assert_eq!(tasks[0].title, "a");
    assert!(tasks[1].done);
}

#[tokio::test]
async fn list_tasks_null_body_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let client = TasksClient::new(server.uri());
    let tasks = client.list_tasks().await.unwrap();

    assert!(tasks.is_empty());
}

#[tokio::test]
async fn list_tasks_blank_body_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = TasksClient::new(server.uri());
    let tasks = client.list_tasks().await.unwrap();

    assert!(tasks.is_empty());
}

#[tokio::test]
async fn list_tasks_server_error_is_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = TasksClient::new(server.uri());
    let err = client.list_tasks().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn list_tasks_malformed_body_is_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"unexpected": "shape"}"#))
        .mount(&server)
        .await;

    let client = TasksClient::new(server.uri());
    let err = client.list_tasks().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn create_task_posts_payload_and_uses_server_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"title": "buy milk", "done": false})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": 7, "title": "buy milk", "done": false})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = TasksClient::new(format!("{}/tasks", server.uri()));
    let created = client.create_task("buy milk").await.unwrap();

    assert_eq!(created.id, TaskId::new(7));
    assert_eq!(created.title, "buy milk");
    assert!(!created.done);
}

#[tokio::test]
async fn create_task_rejection_is_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("title is required"))
        .mount(&server)
        .await;

    let client = TasksClient::new(server.uri());
    let err = client.create_task("buy milk").await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn create_task_malformed_body_is_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let client = TasksClient::new(server.uri());
    let err = client.create_task("buy milk").await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

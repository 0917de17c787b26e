//! Handler tests for the Todos domain
//!
//! These drive `handlers::router` directly:
//! - Request deserialization and validation
//! - Response serialization
//! - HTTP status codes and error bodies
//!
//! The `/api/v1` prefix, CORS and docs are added by the application.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_todos::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDatabase;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn sqlite_app() -> (Router, TestDatabase) {
    let db = TestDatabase::new().await;
    let service = TodoService::new(SqliteTodoRepository::new(db.connection()));
    (handlers::router(service), db)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn create(app: &Router, task: &str, priority: &str) -> TodoResponse {
    let response = app
        .clone()
        .oneshot(post_json("/", json!({ "task": task, "priority": priority })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_returns_201_with_created_status() {
    let (app, _db) = sqlite_app().await;

    let todo = create(&app, "buy milk", "high").await;

    assert!(todo.id > 0);
    assert_eq!(todo.task, "buy milk");
    assert_eq!(todo.status, "created");
    assert_eq!(todo.priority, "high");
}

#[tokio::test]
async fn test_create_rejects_invalid_priority() {
    let (app, _db) = sqlite_app().await;

    let response = app
        .clone()
        .oneshot(post_json("/", json!({ "task": "x", "priority": "urgent" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "invalid priority");

    // Nothing was stored
    let todos: Vec<TodoResponse> = json_body(app.oneshot(get("/")).await.unwrap().into_body()).await;
    assert!(todos.is_empty());
}

#[tokio::test]
async fn test_create_rejects_missing_or_empty_task() {
    let (app, _db) = sqlite_app().await;

    let missing = app
        .clone()
        .oneshot(post_json("/", json!({ "priority": "low" })))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let empty = app
        .clone()
        .oneshot(post_json("/", json!({ "task": "", "priority": "low" })))
        .await
        .unwrap();
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(empty.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["task"].is_array());
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let (app, _db) = sqlite_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"task\":"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_todo_returns_404() {
    let (app, _db) = sqlite_app().await;

    let response = app.oneshot(get("/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "todo not found");
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_non_integer_id_returns_400() {
    let (app, _db) = sqlite_app().await;

    let response = app.oneshot(get("/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_zero_id_returns_400_for_every_method() {
    let (app, _db) = sqlite_app().await;

    let delete = Request::builder()
        .method("DELETE")
        .uri("/0")
        .body(Body::empty())
        .unwrap();
    let requests = [
        get("/0"),
        put_json("/0", json!({ "task": "never stored" })),
        delete,
    ];

    for request in requests {
        let method = request.method().clone();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method}");

        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["error"], "INVALID_ID", "{method}");
    }
}

#[tokio::test]
async fn test_get_returns_created_todo() {
    let (app, _db) = sqlite_app().await;
    let created = create(&app, "walk dog", "medium").await;

    let response = app
        .oneshot(get(&format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let todo: TodoResponse = json_body(response.into_body()).await;
    assert_eq!(todo, created);
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let (app, _db) = sqlite_app().await;
    let created = create(&app, "old", "medium").await;

    let response = app
        .clone()
        .oneshot(put_json(
            &format!("/{}", created.id),
            json!({ "status": "processing" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: TodoResponse = json_body(response.into_body()).await;
    assert_eq!(updated.task, "old");
    assert_eq!(updated.status, "processing");
    assert_eq!(updated.priority, "medium");

    // Unknown priority tokens are ignored on update
    let response = app
        .oneshot(put_json(
            &format!("/{}", created.id),
            json!({ "task": "new", "priority": "urgent" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: TodoResponse = json_body(response.into_body()).await;
    assert_eq!(updated.task, "new");
    assert_eq!(updated.priority, "medium");
}

#[tokio::test]
async fn test_update_missing_todo_returns_404() {
    let (app, _db) = sqlite_app().await;

    let response = app
        .clone()
        .oneshot(put_json("/42", json!({ "task": "ghost" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The failed update did not create the row
    let response = app.oneshot(get("/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_204_then_404() {
    let (app, _db) = sqlite_app().await;
    let created = create(&app, "temporary", "low").await;
    let uri = format!("/{}", created.id);

    let delete = |uri: String| {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete(uri.clone())).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(delete(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_orders_and_filters() {
    let (app, _db) = sqlite_app().await;
    create(&app, "buy milk", "low").await;
    create(&app, "buy bread", "high").await;
    create(&app, "Milk shake", "medium").await;

    let todos: Vec<TodoResponse> =
        json_body(app.clone().oneshot(get("/")).await.unwrap().into_body()).await;
    let priorities: Vec<&str> = todos.iter().map(|t| t.priority.as_str()).collect();
    assert_eq!(priorities, vec!["high", "medium", "low"]);

    let todos: Vec<TodoResponse> = json_body(
        app.clone()
            .oneshot(get("/?order=asc"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let priorities: Vec<&str> = todos.iter().map(|t| t.priority.as_str()).collect();
    assert_eq!(priorities, vec!["low", "medium", "high"]);

    let todos: Vec<TodoResponse> =
        json_body(app.oneshot(get("/?task=milk")).await.unwrap().into_body()).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].task, "buy milk");
}

#[tokio::test]
async fn test_list_with_bad_order_returns_500() {
    let (app, _db) = sqlite_app().await;

    let response = app.oneshot(get("/?order=sideways")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_in_memory_repository_behaves_the_same() {
    let app = handlers::router(TodoService::new(InMemoryTodoRepository::new()));

    let created = create(&app, "buy milk", "high").await;
    assert_eq!(created.id, 1);

    let response = app
        .clone()
        .oneshot(get(&format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

//! API client integration tests
//!
//! Each test spins up an in-process stub backend on an ephemeral port and
//! drives the real client against it.
//!
//! Run with: cargo test --test client_tests

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get};
use axum::{Json, Router};
use robolearn::api::models::Ack;
use robolearn::client::{ApiClient, MemoryTokenStore, TokenStore};
use robolearn::config::ApiConfig;
use robolearn::error::{ApiErrorKind, Error, NETWORK_ERROR};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Start a stub backend, returning its origin
async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(origin: &str, tokens: Arc<dyn TokenStore>) -> ApiClient {
    let config = ApiConfig {
        url: origin.to_string(),
        base_path: "/api".to_string(),
        timeout_secs: Some(5),
    };
    ApiClient::new(&config, tokens).unwrap()
}

/// Stub echoing the request's authorization and content-type headers
fn echo_headers_app() -> Router {
    Router::new().route(
        "/api/echo",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let content_type = headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            Json(json!({ "auth": auth, "contentType": content_type }))
        }),
    )
}

#[tokio::test]
async fn test_bearer_header_attached_when_token_present() {
    let origin = spawn_backend(echo_headers_app()).await;
    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token("tok123"));
    let client = client(&origin, tokens);

    let echoed: Value = client.get("/echo").await.unwrap();
    assert_eq!(echoed["auth"], "Bearer tok123");
}

#[tokio::test]
async fn test_no_bearer_header_when_token_absent() {
    let origin = spawn_backend(echo_headers_app()).await;
    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let client = client(&origin, tokens);

    let echoed: Value = client.get("/echo").await.unwrap();
    assert_eq!(echoed["auth"], Value::Null);
}

#[tokio::test]
async fn test_content_type_always_json() {
    let origin = spawn_backend(echo_headers_app()).await;
    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let client = client(&origin, tokens);

    let echoed: Value = client.get("/echo").await.unwrap();
    assert_eq!(echoed["contentType"], "application/json");
}

#[tokio::test]
async fn test_token_read_at_call_time() {
    // A token stored after client construction must still be attached
    let origin = spawn_backend(echo_headers_app()).await;
    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let client = client(&origin, tokens.clone());

    let before: Value = client.get("/echo").await.unwrap();
    assert_eq!(before["auth"], Value::Null);

    tokens.set("late-tok").unwrap();
    let after: Value = client.get("/echo").await.unwrap();
    assert_eq!(after["auth"], "Bearer late-tok");
}

#[tokio::test]
async fn test_204_resolves_to_empty_object() {
    let app = Router::new().route("/api/things/t1", delete(|| async { StatusCode::NO_CONTENT }));
    let origin = spawn_backend(app).await;
    let client = client(&origin, Arc::new(MemoryTokenStore::new()));

    let ack: Ack = client.delete("/things/t1").await.unwrap();
    assert!(ack.message.is_none());
}

#[tokio::test]
async fn test_empty_body_resolves_to_empty_object() {
    let app = Router::new().route("/api/empty", get(|| async { (StatusCode::OK, String::new()) }));
    let origin = spawn_backend(app).await;
    let client = client(&origin, Arc::new(MemoryTokenStore::new()));

    let ack: Ack = client.get("/empty").await.unwrap();
    assert!(ack.message.is_none());
}

#[tokio::test]
async fn test_error_uses_error_field_and_status() {
    let app = Router::new().route(
        "/api/fail",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid credentials" })),
            )
        }),
    );
    let origin = spawn_backend(app).await;
    let client = client(&origin, Arc::new(MemoryTokenStore::new()));

    let err = client.get::<Ack>("/fail").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.kind(), Some(ApiErrorKind::Auth));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_error_falls_back_to_message_field() {
    let app = Router::new().route(
        "/api/fail",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Course not found" })),
            )
        }),
    );
    let origin = spawn_backend(app).await;
    let client = client(&origin, Arc::new(MemoryTokenStore::new()));

    let err = client.get::<Ack>("/fail").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.kind(), Some(ApiErrorKind::Validation));
    assert_eq!(err.to_string(), "Course not found");
}

#[tokio::test]
async fn test_error_generic_fallback_for_unusable_body() {
    let app = Router::new().route(
        "/api/fail",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>") }),
    );
    let origin = spawn_backend(app).await;
    let client = client(&origin, Arc::new(MemoryTokenStore::new()));

    let err = client.get::<Ack>("/fail").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.kind(), Some(ApiErrorKind::Unknown));
    assert_eq!(err.to_string(), "An error occurred");
}

#[tokio::test]
async fn test_validation_error_preserves_field_array() {
    let app = Router::new().route(
        "/api/fail",
        get(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Validation failed", "field": ["email", "password"] })),
            )
        }),
    );
    let origin = spawn_backend(app).await;
    let client = client(&origin, Arc::new(MemoryTokenStore::new()));

    let err = client.get::<Ack>("/fail").await.unwrap_err();
    assert_eq!(
        err.fields(),
        Some(&["email".to_string(), "password".to_string()][..])
    );
}

#[tokio::test]
async fn test_network_failure_has_status_zero() {
    // Grab a port and release it so the connection is refused
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = client(&origin, Arc::new(MemoryTokenStore::new()));
    let err = client.get::<Ack>("/anything").await.unwrap_err();

    assert_eq!(err.status(), Some(0));
    assert_eq!(err.kind(), Some(ApiErrorKind::Connectivity));
    assert_eq!(err.to_string(), NETWORK_ERROR);
}

#[tokio::test]
async fn test_malformed_success_body_is_connectivity_error() {
    let app = Router::new().route("/api/garbled", get(|| async { "definitely not json" }));
    let origin = spawn_backend(app).await;
    let client = client(&origin, Arc::new(MemoryTokenStore::new()));

    let err = client.get::<Ack>("/garbled").await.unwrap_err();
    assert_eq!(err.status(), Some(0));
    assert_eq!(err.kind(), Some(ApiErrorKind::Connectivity));
}

#[tokio::test]
async fn test_query_parameters_are_encoded() {
    let app = Router::new().route(
        "/api/search",
        get(|Query(params): Query<HashMap<String, String>>| async move { Json(json!(params)) }),
    );
    let origin = spawn_backend(app).await;
    let client = client(&origin, Arc::new(MemoryTokenStore::new()));

    let echoed: Value = client
        .get_query(
            "/search",
            &[
                ("level", "ALL_LEVELS".to_string()),
                ("search", "robot arms".to_string()),
            ],
        )
        .await
        .unwrap();

    assert_eq!(echoed["level"], "ALL_LEVELS");
    assert_eq!(echoed["search"], "robot arms");
}

#[tokio::test]
async fn test_post_serializes_body() {
    let app = Router::new().route(
        "/api/mirror",
        axum::routing::post(|Json(body): Json<Value>| async move { Json(body) }),
    );
    let origin = spawn_backend(app).await;
    let client = client(&origin, Arc::new(MemoryTokenStore::new()));

    let mirrored: Value = client
        .post("/mirror", &json!({ "email": "a@b.com", "password": "secret1" }))
        .await
        .unwrap();
    assert_eq!(mirrored["email"], "a@b.com");
}

#[tokio::test]
async fn test_local_errors_carry_no_status() {
    let err = Error::ConfigNotFound;
    assert_eq!(err.status(), None);
    assert_eq!(err.kind(), None);
}

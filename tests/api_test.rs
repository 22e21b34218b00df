//! Integration tests for the sign-up endpoint.
//!
//! These tests drive the real router with an in-memory store, so the
//! extractor, handler, service, and envelope are exercised together
//! without a database connection.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use globalsource_api::api::{create_router, AppState};
use globalsource_api::infra::Database;
use globalsource_api::services::Registrar;

use common::MemoryUserStore;

fn test_router(store: Arc<MemoryUserStore>) -> Router {
    let database = Arc::new(Database::from_connection(DatabaseConnection::default()));
    let signup_service = Arc::new(Registrar::new(store));
    create_router(AppState::new(signup_service, database))
}

async fn post_sign_up(router: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/sign-up")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn ann_lee() -> Value {
    json!({ "name": "Ann Lee", "email": "ann@x.com", "password": "secret123" })
}

#[tokio::test]
async fn missing_field_returns_400_and_writes_nothing() {
    let store = Arc::new(MemoryUserStore::new());
    let router = test_router(store.clone());

    for body in [
        json!({ "email": "ann@x.com", "password": "secret123" }),
        json!({ "name": "Ann Lee", "password": "secret123" }),
        json!({ "name": "Ann Lee", "email": "ann@x.com" }),
    ] {
        let (status, envelope) = post_sign_up(&router, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(envelope["success"], false);
        assert_eq!(envelope["statusCode"], 400);
        assert_eq!(envelope["message"], "All fields are necessary.");
        assert_eq!(envelope["data"], Value::Null);
    }

    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn empty_field_returns_400_and_writes_nothing() {
    let store = Arc::new(MemoryUserStore::new());
    let router = test_router(store.clone());

    let body = json!({ "name": "", "email": "ann@x.com", "password": "secret123" });
    let (status, envelope) = post_sign_up(&router, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(envelope["message"], "All fields are necessary.");
    assert_eq!(envelope["errors"][0]["kind"], "validation");
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn invalid_payload_is_idempotent() {
    let store = Arc::new(MemoryUserStore::new());
    let router = test_router(store.clone());

    let body = json!({ "name": "", "email": "ann@x.com", "password": "secret123" });
    for _ in 0..3 {
        let (status, envelope) = post_sign_up(&router, body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(envelope["success"], false);
        assert_eq!(envelope["message"], "All fields are necessary.");
    }

    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn malformed_body_returns_400_validation_failure() {
    let store = Arc::new(MemoryUserStore::new());
    let router = test_router(store.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/sign-up")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let envelope: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["statusCode"], 400);
    assert_eq!(envelope["errors"][0]["kind"], "validation");
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn fresh_email_creates_account() {
    let store = Arc::new(MemoryUserStore::new());
    let router = test_router(store.clone());

    let (status, envelope) = post_sign_up(&router, ann_lee()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["statusCode"], 201);
    assert_eq!(envelope["message"], "User created successfully");
    assert_eq!(envelope["data"]["name"], "Ann Lee");
    assert_eq!(envelope["data"]["email"], "ann@x.com");
    assert_eq!(envelope["errors"], json!([]));
    // The raw credential never appears in the payload
    assert_eq!(envelope["data"].get("password"), None);
    assert_eq!(envelope["data"].get("password_hash"), None);

    let stored = store.get("ann@x.com").unwrap();
    assert_eq!(stored.name, "Ann Lee");
    assert_eq!(store.count_by_email("ann@x.com"), 1);
}

#[tokio::test]
async fn duplicate_email_returns_400_without_second_record() {
    let store = Arc::new(MemoryUserStore::new());
    let router = test_router(store.clone());

    let (first, _) = post_sign_up(&router, ann_lee()).await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, envelope) = post_sign_up(&router, ann_lee()).await;
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["message"], "User already exists. Please login.");
    assert_eq!(envelope["errors"][0]["kind"], "conflict");
    assert_eq!(store.count_by_email("ann@x.com"), 1);
}

#[tokio::test]
async fn insert_time_conflict_returns_same_duplicate_envelope() {
    // A request that passes the lookup fast-path but loses the race at
    // the unique index gets the same 400 as one the fast-path caught.
    let store = Arc::new(MemoryUserStore::new());
    let router = test_router(store.clone());

    let (first, _) = post_sign_up(&router, ann_lee()).await;
    assert_eq!(first, StatusCode::CREATED);

    store.miss_lookups();
    let (second, envelope) = post_sign_up(&router, ann_lee()).await;

    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["message"], "User already exists. Please login.");
    assert_eq!(envelope["errors"][0]["kind"], "conflict");
    assert_eq!(store.count_by_email("ann@x.com"), 1);
}

#[tokio::test]
async fn store_create_failure_returns_500_with_no_partial_record() {
    let store = Arc::new(MemoryUserStore::new());
    store.fail_creates();
    let router = test_router(store.clone());

    let (status, envelope) = post_sign_up(&router, ann_lee()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["statusCode"], 500);
    assert_eq!(envelope["message"], "Internal server error.");
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn unreachable_store_returns_generic_500() {
    let store = Arc::new(MemoryUserStore::new());
    store.fail_lookups();
    let router = test_router(store.clone());

    let (status, envelope) = post_sign_up(&router, ann_lee()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        envelope["message"],
        "Internal server error, Please try after some time."
    );
    // Internal detail stays in the logs
    assert!(!envelope.to_string().contains("store unreachable"));
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn root_endpoint_returns_welcome_message() {
    let store = Arc::new(MemoryUserStore::new());
    let router = test_router(store);

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Welcome to the GlobalSource Connect API");
}

//! Test helpers for evaporation server integration tests
//!
//! This module provides utilities for:
//! - Building the full application router over a chosen store
//! - A store double whose every call fails
//! - Sending requests and decoding JSON responses

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use evapo_server::{
    api,
    config::Config,
    db::{Collection, DbError, DbResult, Document, DocumentStore, MemoryDocumentStore, Repository},
};

/// Store that refuses every operation, as an unreachable database would
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert_one(&self, _collection: Collection, _document: Document) -> DbResult<()> {
        Err(DbError::Unavailable("connection refused".to_string()))
    }

    async fn find_recent(&self, _collection: Collection, _limit: i64) -> DbResult<Vec<Document>> {
        Err(DbError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> DbResult<()> {
        Err(DbError::Unavailable("connection refused".to_string()))
    }
}

/// Application router over a fresh in-memory store, plus the store for inspection
pub fn memory_app() -> (Router, Arc<MemoryDocumentStore>) {
    let store = Arc::new(MemoryDocumentStore::new());
    let app = api::create_router(Repository::new(store.clone()), &Config::default());
    (app, store)
}

pub fn failing_app() -> Router {
    api::create_router(Repository::new(Arc::new(FailingStore)), &Config::default())
}

/// Weather observation used across tests: 25 °C, 60 %, 2 m/s, 20 MJ/m²/day
pub fn reference_weather() -> Value {
    json!({
        "temperature": 25.0,
        "humidity": 60.0,
        "wind_speed": 2.0,
        "solar_radiation": 20.0,
        "location": "Pune"
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, value)
}

/// Helper to send a GET request
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

/// Helper to send a POST request with a JSON body
pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}

/// Helper to send a POST request with an arbitrary body labelled as JSON
pub async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// Asserts the standard error envelope and returns its code
pub fn error_code(body: &Value) -> &str {
    assert_eq!(body["success"], json!(false));
    body["error"]["code"].as_str().unwrap()
}

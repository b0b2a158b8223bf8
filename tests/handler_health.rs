mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use kv_shortener::application::services::CreatePolicy;
use kv_shortener::domain::entities::UrlMapping;
use kv_shortener::domain::repositories::{MappingStore, StoreError, StoreResult};
use serde_json::Value;
use std::sync::Arc;

/// Store whose backend is permanently down.
struct UnreachableStore;

fn down<T>() -> StoreResult<T> {
    Err(StoreError::ConnectionError("connection refused".to_string()))
}

#[async_trait]
impl MappingStore for UnreachableStore {
    async fn get_forward(&self, _short_code: &str) -> StoreResult<Option<String>> {
        down()
    }
    async fn get_reverse(&self, _original_url: &str) -> StoreResult<Option<String>> {
        down()
    }
    async fn exists(&self, _short_code: &str) -> StoreResult<bool> {
        down()
    }
    async fn put(&self, _mapping: &UrlMapping) -> StoreResult<()> {
        down()
    }
    async fn delete(&self, _short_code: &str) -> StoreResult<()> {
        down()
    }
    async fn health_check(&self) -> bool {
        false
    }
}

fn unreachable_server() -> TestServer {
    let state = common::create_test_state(Arc::new(UnreachableStore), CreatePolicy::Reuse);
    TestServer::new(common::make_app(state)).unwrap()
}

#[tokio::test]
async fn test_health_ok() {
    let (server, _store) = common::make_server(CreatePolicy::Reuse);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded_when_store_down() {
    let response = unreachable_server().get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json::<Value>()["status"], "degraded");
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let response = unreachable_server().get("/api/url/abc123").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"]["code"], "internal_error");
}

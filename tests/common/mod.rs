#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use kv_shortener::api::handlers::health_handler;
use kv_shortener::api::routes::mapping_routes;
use kv_shortener::application::services::{CreatePolicy, MappingService};
use kv_shortener::domain::entities::UrlMapping;
use kv_shortener::domain::repositories::MappingStore;
use kv_shortener::infrastructure::store::InMemoryMappingStore;
use kv_shortener::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

pub fn create_test_store() -> Arc<InMemoryMappingStore> {
    Arc::new(InMemoryMappingStore::new(TTL))
}

pub fn create_test_state(store: Arc<dyn MappingStore>, policy: CreatePolicy) -> AppState {
    AppState::new(Arc::new(MappingService::with_policy(store, policy)))
}

pub fn make_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/url", mapping_routes())
        .with_state(state)
}

/// Test server over a fresh in-memory store, returned alongside the store.
pub fn make_server(policy: CreatePolicy) -> (TestServer, Arc<InMemoryMappingStore>) {
    let store = create_test_store();
    let state = create_test_state(store.clone(), policy);
    (TestServer::new(make_app(state)).unwrap(), store)
}

pub async fn seed_mapping(store: &InMemoryMappingStore, url: &str, code: &str) {
    store.put(&UrlMapping::new(url, code)).await.unwrap();
}

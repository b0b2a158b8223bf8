mod common;

use axum::http::StatusCode;
use kv_shortener::application::services::CreatePolicy;
use kv_shortener::domain::repositories::MappingStore;

#[tokio::test]
async fn test_delete_success() {
    let (server, store) = common::make_server(CreatePolicy::Reuse);
    common::seed_mapping(&store, "https://www.example.com", "del001").await;

    let response = server.delete("/api/url/del001").await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(!store.exists("del001").await.unwrap());
    assert!(
        store
            .get_reverse("https://www.example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_delete_nonexistent_is_noop() {
    let (server, _store) = common::make_server(CreatePolicy::Reuse);

    server
        .delete("/api/url/nonexistent")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_twice() {
    let (server, store) = common::make_server(CreatePolicy::Reuse);
    common::seed_mapping(&store, "https://www.example.com", "del002").await;

    server
        .delete("/api/url/del002")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete("/api/url/del002")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

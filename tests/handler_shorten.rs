mod common;

use kv_shortener::application::services::CreatePolicy;
use kv_shortener::domain::repositories::MappingStore;
use serde_json::{Value, json};

#[tokio::test]
async fn test_shorten_random_success() {
    let (server, store) = common::make_server(CreatePolicy::Reuse);

    let response = server
        .post("/api/url/shorten/random")
        .json(&json!({ "url": "https://www.example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["originalUrl"], "https://www.example.com");
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());

    let code = json["shortUrl"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert_eq!(
        store.get_forward(code).await.unwrap().as_deref(),
        Some("https://www.example.com")
    );
}

#[tokio::test]
async fn test_shorten_random_twice_returns_same_code() {
    let (server, _store) = common::make_server(CreatePolicy::Reuse);

    let first = server
        .post("/api/url/shorten/random")
        .json(&json!({ "url": "https://x.example" }))
        .await
        .json::<Value>();
    let second = server
        .post("/api/url/shorten/random")
        .json(&json!({ "url": "https://x.example" }))
        .await
        .json::<Value>();

    assert_eq!(first["shortUrl"], second["shortUrl"]);
}

#[tokio::test]
async fn test_shorten_random_replace_policy_mints_fresh_code() {
    let (server, store) = common::make_server(CreatePolicy::Replace);

    let first = server
        .post("/api/url/shorten/random")
        .json(&json!({ "url": "https://x.example" }))
        .await
        .json::<Value>();
    let second = server
        .post("/api/url/shorten/random")
        .json(&json!({ "url": "https://x.example" }))
        .await
        .json::<Value>();

    let old_code = first["shortUrl"].as_str().unwrap();
    let new_code = second["shortUrl"].as_str().unwrap();
    assert_ne!(old_code, new_code);
    assert!(!store.exists(old_code).await.unwrap());
    assert_eq!(
        store.get_reverse("https://x.example").await.unwrap().as_deref(),
        Some(new_code)
    );
}

#[tokio::test]
async fn test_shorten_random_empty_url() {
    let (server, _store) = common::make_server(CreatePolicy::Reuse);

    let response = server
        .post("/api/url/shorten/random")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_random_missing_field() {
    let (server, _store) = common::make_server(CreatePolicy::Reuse);

    let response = server
        .post("/api/url/shorten/random")
        .json(&json!({ "link": "https://www.example.com" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_specific_success() {
    let (server, _store) = common::make_server(CreatePolicy::Reuse);

    let response = server
        .post("/api/url/shorten/specific")
        .json(&json!({ "url": "https://a.example/x", "shortUrl": "abc123" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["originalUrl"], "https://a.example/x");
    assert_eq!(json["shortUrl"], "abc123");
}

#[tokio::test]
async fn test_shorten_specific_conflict() {
    let (server, store) = common::make_server(CreatePolicy::Reuse);

    server
        .post("/api/url/shorten/specific")
        .json(&json!({ "url": "https://a.example/x", "shortUrl": "abc123" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/url/shorten/specific")
        .json(&json!({ "url": "https://b.example/y", "shortUrl": "abc123" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "conflict");

    // The first binding is untouched and no reverse entry was written.
    assert_eq!(
        store.get_forward("abc123").await.unwrap().as_deref(),
        Some("https://a.example/x")
    );
    assert!(store.get_reverse("https://b.example/y").await.unwrap().is_none());
}

#[tokio::test]
async fn test_shorten_specific_accepts_arbitrary_code() {
    let (server, _store) = common::make_server(CreatePolicy::Reuse);

    let response = server
        .post("/api/url/shorten/specific")
        .json(&json!({ "url": "https://a.example/x", "shortUrl": "Ünïcode_&_Spaces Ok" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["shortUrl"], "Ünïcode_&_Spaces Ok");
}

#[tokio::test]
async fn test_shorten_specific_same_url_twice() {
    let (server, store) = common::make_server(CreatePolicy::Reuse);

    for code in ["first", "second"] {
        server
            .post("/api/url/shorten/specific")
            .json(&json!({ "url": "https://a.example/x", "shortUrl": code }))
            .await
            .assert_status_ok();
    }

    // Both codes resolve; the reverse index follows the last write.
    assert!(store.exists("first").await.unwrap());
    assert!(store.exists("second").await.unwrap());
    assert_eq!(
        store.get_reverse("https://a.example/x").await.unwrap().as_deref(),
        Some("second")
    );
}

#[tokio::test]
async fn test_shorten_specific_missing_short_url() {
    let (server, _store) = common::make_server(CreatePolicy::Reuse);

    let response = server
        .post("/api/url/shorten/specific")
        .json(&json!({ "url": "https://a.example/x" }))
        .await;

    response.assert_status_bad_request();
}

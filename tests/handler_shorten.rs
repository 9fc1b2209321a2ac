mod common;

use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_shorten_valid_url_success() {
    let state = common::create_test_state(&["example.com"]);
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com");

    let short_url = json["short_url"].as_str().unwrap();
    assert!((1..=4).contains(&short_url.len()));
    assert!(short_url.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_shorten_accepts_form_body() {
    let state = common::create_test_state(&["example.com"]);
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/shorturl")
        .form(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com/page");
    assert!(json["short_url"].is_string());
}

#[tokio::test]
async fn test_shorten_unparseable_url_reports_invalid() {
    let state = common::create_test_state(&["example.com"]);
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "not a url" }))
        .await;

    // The rejection is payload-level: the status stays 200.
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "invalid url");
    assert!(json.get("short_url").is_none());
}

#[tokio::test]
async fn test_shorten_malformed_scheme_reports_invalid() {
    let state = common::create_test_state(&["example.com"]);
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "ftp:/bad" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "invalid url");
}

#[tokio::test]
async fn test_shorten_unresolvable_host_reports_invalid() {
    let state = common::create_test_state(&["example.com"]);
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "http://this-host-does-not-exist.invalid" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "invalid url");
}

#[tokio::test]
async fn test_shorten_same_url_twice_allocates_two_ids() {
    let state = common::create_test_state(&["example.com"]);
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let first = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    // No dedup: each submission gets its own identifier.
    assert_ne!(first["short_url"], second["short_url"]);
    assert_eq!(first["original_url"], second["original_url"]);
}

#[tokio::test]
async fn test_shorten_rejects_unknown_content_type() {
    let state = common::create_test_state(&["example.com"]);
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/shorturl")
        .text("url=https://example.com")
        .await;

    response.assert_status(axum::http::StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

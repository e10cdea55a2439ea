mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_password_skips_www() {
    let server = common::create_test_server(common::create_random_state());

    let response = server
        .post("/password")
        .json(&json!({ "website": "http://www.google.com.test" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "password": "goo62!" }));
}

#[tokio::test]
async fn test_password_https_domain() {
    let server = common::create_test_server(common::create_random_state());

    let response = server
        .post("/password")
        .json(&json!({ "website": "https://example.org" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["password"], "exa70!");
}

#[tokio::test]
async fn test_password_only_dots_rejected() {
    let server = common::create_test_server(common::create_random_state());

    let response = server
        .post("/password")
        .json(&json!({ "website": "...." }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["detail"], "invalid website");
}

#[tokio::test]
async fn test_password_empty_website_rejected() {
    let server = common::create_test_server(common::create_random_state());

    let response = server
        .post("/password")
        .json(&json!({ "website": "" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["detail"], "website required");
}

#[tokio::test]
async fn test_password_missing_field() {
    let server = common::create_test_server(common::create_random_state());

    let response = server
        .post("/password")
        .json(&json!({ "site": "example.org" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert!(json["detail"].is_string());
}

#[tokio::test]
async fn test_password_malformed_json() {
    let server = common::create_test_server(common::create_random_state());

    let response = server
        .post("/password")
        .text("{\"website\": ")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
}

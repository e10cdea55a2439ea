mod common;

use axum::http::StatusCode;
use std::collections::HashSet;

fn numbers_of(json: &serde_json::Value) -> Vec<i64> {
    json["numbers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n.as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_lotto_default_count() {
    let server = common::create_test_server(common::create_random_state());

    let response = server.get("/lotto").await;

    response.assert_status_ok();

    let numbers = numbers_of(&response.json::<serde_json::Value>());
    assert_eq!(numbers.len(), 6);
}

#[tokio::test]
async fn test_lotto_explicit_count() {
    let server = common::create_test_server(common::create_random_state());

    let response = server.get("/lotto").add_query_param("count", 6).await;

    response.assert_status_ok();

    let numbers = numbers_of(&response.json::<serde_json::Value>());
    assert_eq!(numbers.len(), 6);

    let unique: HashSet<_> = numbers.iter().collect();
    assert_eq!(unique.len(), 6);
    assert!(numbers.iter().all(|n| (1..=45).contains(n)));
}

#[tokio::test]
async fn test_lotto_every_allowed_count() {
    let server = common::create_test_server(common::create_random_state());

    for count in 1..=10 {
        let response = server.get("/lotto").add_query_param("count", count).await;

        response.assert_status_ok();
        let numbers = numbers_of(&response.json::<serde_json::Value>());
        assert_eq!(numbers.len(), count as usize);
    }
}

#[tokio::test]
async fn test_lotto_count_zero_rejected() {
    let server = common::create_test_server(common::create_random_state());

    let response = server.get("/lotto").add_query_param("count", 0).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["detail"], "count must be between 1 and 10");
}

#[tokio::test]
async fn test_lotto_count_above_policy_rejected() {
    let server = common::create_test_server(common::create_random_state());

    // 11 is valid for the library but not for the service
    let response = server.get("/lotto").add_query_param("count", 11).await;

    response.assert_status_bad_request();

    let response = server.get("/lotto").add_query_param("count", -1).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_lotto_non_integer_count() {
    let server = common::create_test_server(common::create_random_state());

    let response = server.get("/lotto").add_query_param("count", "six").await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert!(json["detail"].is_string());
}

#[tokio::test]
async fn test_lotto_seeded_state_is_reproducible() {
    let first = common::create_test_server(common::create_test_state(1234));
    let second = common::create_test_server(common::create_test_state(1234));

    let a = first.get("/lotto").add_query_param("count", 10).await;
    let b = second.get("/lotto").add_query_param("count", 10).await;

    assert_eq!(
        numbers_of(&a.json::<serde_json::Value>()),
        numbers_of(&b.json::<serde_json::Value>())
    );
}

#[tokio::test]
async fn test_lotto_count_beyond_i64_is_out_of_range() {
    let server = common::create_test_server(common::create_random_state());

    let response = server
        .get("/lotto")
        .add_query_param("count", "99999999999999999999")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["detail"], "count must be between 1 and 10");

    let response = server
        .get("/lotto")
        .add_query_param("count", "-99999999999999999999")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_lotto_repeated_count_rejected() {
    let server = common::create_test_server(common::create_random_state());

    let response = server.get("/lotto?count=1&count=2").await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

// HTTP API tests: requests driven straight through the router.
//
// Uses tower's oneshot, so no socket is bound.

#![cfg(feature = "web")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use threadmint::config::Config;
use threadmint::scoring::absorption::UnknownEditionPolicy;
use threadmint::web::{build_router, AppState};

fn state_with(config: Config) -> AppState {
    AppState {
        config: Arc::new(config),
    }
}

async fn send(config: Config, request: Request<Body>) -> (StatusCode, Value) {
    let response = build_router(state_with(config))
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn post_react(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/react")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ============================================================
// Health and prices
// ============================================================

#[tokio::test]
async fn health_ok() {
    let (status, json) = send(Config::default(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn prices_as_wei_strings() {
    let (status, json) = send(Config::default(), get("/api/prices")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["like"], "2000000000000000");
    assert_eq!(json["comment"], "10000000000000000");
    assert_eq!(json["quote"], "20000000000000000");
    assert_eq!(json["eth"]["quote"], "0.0200");
}

// ============================================================
// POST /api/react
// ============================================================

#[tokio::test]
async fn react_exact_payment_accepted() {
    let body = serde_json::json!({
        "postId": "post-1",
        "actorId": "user-9",
        "kind": "like",
        "amountWei": "2000000000000000",
    });
    let (status, json) = send(Config::default(), post_react(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["reaction"]["kind"], "like");
    assert_eq!(json["reaction"]["amountWei"], "2000000000000000");
    assert_eq!(json["reaction"]["requiredWei"], "2000000000000000");
    assert_eq!(json["reaction"]["postId"], "post-1");
}

#[tokio::test]
async fn react_comment_text_echoed() {
    let body = serde_json::json!({
        "postId": "post-1",
        "actorId": "user-9",
        "kind": "comment",
        "commentText": "great thought",
        "amountWei": "10000000000000000",
    });
    let (status, json) = send(Config::default(), post_react(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["reaction"]["commentText"], "great thought");
}

#[tokio::test]
async fn react_underpayment_rejected() {
    let body = serde_json::json!({
        "postId": "post-1",
        "actorId": "user-9",
        "kind": "quote",
        "amountWei": "19999999999999999",
    });
    let (status, json) = send(Config::default(), post_react(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Insufficient payment for reaction");
}

#[tokio::test]
async fn react_missing_amount_treated_as_zero() {
    let body = serde_json::json!({ "postId": "p", "actorId": "a", "kind": "like" });
    let (status, json) = send(Config::default(), post_react(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Insufficient payment for reaction");
}

#[tokio::test]
async fn react_missing_fields() {
    let body = serde_json::json!({ "postId": "p", "kind": "like", "amountWei": "1" });
    let (status, json) = send(Config::default(), post_react(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing required fields");
}

#[tokio::test]
async fn react_unknown_kind() {
    let body = serde_json::json!({
        "postId": "p",
        "actorId": "a",
        "kind": "poke",
        "amountWei": "999999999999999999",
    });
    let (status, json) = send(Config::default(), post_react(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("poke"));
}

#[tokio::test]
async fn react_malformed_amount() {
    let body = serde_json::json!({
        "postId": "p",
        "actorId": "a",
        "kind": "like",
        "amountWei": "0.002",
    });
    let (status, json) = send(Config::default(), post_react(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().starts_with("Invalid amountWei"));
}

#[tokio::test]
async fn react_unknown_kind_reported_before_malformed_amount() {
    let body = serde_json::json!({
        "postId": "p",
        "actorId": "a",
        "kind": "poke",
        "amountWei": "abc",
    });
    let (status, json) = send(Config::default(), post_react(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("poke"), "got {error}");
    assert!(!error.starts_with("Invalid amountWei"));
}

#[tokio::test]
async fn react_empty_amount_treated_as_zero() {
    let body = serde_json::json!({
        "postId": "p",
        "actorId": "a",
        "kind": "like",
        "amountWei": "",
    });
    let (status, json) = send(Config::default(), post_react(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Insufficient payment for reaction");
}

#[tokio::test]
async fn react_numeric_ids_accepted() {
    let body = serde_json::json!({
        "postId": 42,
        "actorId": 7,
        "kind": "like",
        "amountWei": "2000000000000000",
    });
    let (status, json) = send(Config::default(), post_react(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["reaction"]["postId"], "42");
    assert_eq!(json["reaction"]["actorId"], "7");
}

#[tokio::test]
async fn react_non_string_kind_is_missing_field() {
    let body = serde_json::json!({
        "postId": "p",
        "actorId": "a",
        "kind": true,
        "amountWei": "1",
    });
    let (status, json) = send(Config::default(), post_react(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing required fields");
}

#[tokio::test]
async fn react_malformed_json_gets_json_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/react")
        .header("content-type", "application/json")
        .body(Body::from("{\"postId\": "))
        .unwrap();
    let (status, json) = send(Config::default(), request).await;
    assert!(status.is_client_error(), "got {status}");
    assert!(json["error"].is_string(), "got {json}");
}

#[tokio::test]
async fn react_wrong_body_shape_gets_json_error() {
    let (status, json) = send(Config::default(), post_react(serde_json::json!([1, 2]))).await;
    assert!(status.is_client_error(), "got {status}");
    assert!(json["error"].is_string(), "got {json}");
}

// ============================================================
// GET /api/absorption
// ============================================================

#[tokio::test]
async fn absorption_limited_fifty() {
    let (status, json) = send(
        Config::default(),
        get("/api/absorption?editionType=limited&editions=50"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let weight = json["weight"].as_f64().unwrap();
    assert!((weight - 0.5746).abs() < 1e-4, "got {weight}");
    assert_eq!(json["totalSupply"], 50);
}

#[tokio::test]
async fn absorption_open_default_supply() {
    let (status, json) = send(Config::default(), get("/api/absorption?editionType=open")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["weight"].as_f64().unwrap(), 1.0);
    assert_eq!(json["totalSupply"], 1000);
}

#[tokio::test]
async fn absorption_zero_supply_rejected() {
    let (status, _) = send(
        Config::default(),
        get("/api/absorption?editionType=limited&editions=0"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn absorption_unknown_type_follows_policy() {
    let (status, _) = send(Config::default(), get("/api/absorption?editionType=rare")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let lenient = Config {
        unknown_edition: UnknownEditionPolicy::FallbackToBase,
        ..Config::default()
    };
    let (status, json) = send(lenient, get("/api/absorption?editionType=rare")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["weight"].as_f64().unwrap(), 1.0);
    assert!(json["totalSupply"].is_null());
}

#[tokio::test]
async fn absorption_missing_type() {
    let (status, json) = send(Config::default(), get("/api/absorption")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing editionType");
}

#[tokio::test]
async fn absorption_non_numeric_editions_gets_json_error() {
    let (status, json) = send(
        Config::default(),
        get("/api/absorption?editionType=limited&editions=abc"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string(), "got {json}");
}

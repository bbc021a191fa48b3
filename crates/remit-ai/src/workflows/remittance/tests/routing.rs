use super::common::*;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(payload).expect("serialize payload"),
        ))
        .expect("request")
}

#[tokio::test]
async fn remit_endpoint_returns_sealed_receipt() {
    let router = build_router();
    let request = post_json(
        "/api/v1/remit",
        &json!({ "amount": 2500.0, "recipient": "Rahim in Dhaka" }),
    );

    let response = router.oneshot(request).await.expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("success"), Some(&json!(true)));
    assert_eq!(payload.get("recipient"), Some(&json!("Rahim in Dhaka")));
    assert!(payload
        .get("public_key")
        .and_then(Value::as_str)
        .is_some_and(|key| !key.is_empty()));
    assert!(payload
        .get("encrypted_data")
        .and_then(Value::as_str)
        .is_some_and(|data| !data.is_empty()));
}

#[tokio::test]
async fn remit_endpoint_rejects_invalid_amount() {
    let router = build_router();
    let request = post_json(
        "/api/v1/remit",
        &json!({ "amount": 0, "recipient": "Rahim in Dhaka" }),
    );

    let response = router.oneshot(request).await.expect("router dispatch");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("amount"));
}

#[tokio::test]
async fn fraud_check_endpoint_labels_the_risk() {
    let router = build_router();
    let request = post_json(
        "/api/v1/remittances/fraud-check",
        &json!({ "amount": 1000.0, "message": "verify your account" }),
    );

    let response = router.oneshot(request).await.expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("risk"), Some(&json!("medium")));
}

#[tokio::test]
async fn record_then_impact_roundtrip() {
    let router = build_router();

    let record = post_json(
        "/api/v1/remittances/sender-1/records",
        &json!({
            "amount": 3000.0,
            "recipient": "Rahim in Dhaka",
            "encrypted_data": "ZGVtbyBjaXBoZXJ0ZXh0",
        }),
    );
    let response = router
        .clone()
        .oneshot(record)
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::CREATED);

    let impact = Request::builder()
        .method("GET")
        .uri("/api/v1/remittances/sender-1/impact")
        .body(Body::empty())
        .expect("request");
    let response = router.oneshot(impact).await.expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("remittance_count"), Some(&json!(1)));
    assert_eq!(payload.get("avg_allocation_percent"), Some(&json!(30.0)));
    let score = payload
        .get("impact_score")
        .and_then(Value::as_u64)
        .expect("score present");
    assert_eq!(score, 52);
}

#[tokio::test]
async fn history_endpoint_lists_only_the_requested_user() {
    let router = build_router();

    let record = post_json(
        "/api/v1/remittances/sender-2/records",
        &json!({
            "amount": 800.0,
            "recipient": "Rahim in Dhaka",
            "encrypted_data": "ZGVtbyBjaXBoZXJ0ZXh0",
        }),
    );
    let response = router
        .clone()
        .oneshot(record)
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::CREATED);

    let history = Request::builder()
        .method("GET")
        .uri("/api/v1/remittances/sender-2/records")
        .body(Body::empty())
        .expect("request");
    let response = router
        .clone()
        .oneshot(history)
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(1));

    let empty = Request::builder()
        .method("GET")
        .uri("/api/v1/remittances/sender-3/records")
        .body(Body::empty())
        .expect("request");
    let response = router.oneshot(empty).await.expect("router dispatch");
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(0));
}

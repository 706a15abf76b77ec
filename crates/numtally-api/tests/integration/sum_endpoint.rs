//! `POST /api/sum` behaviour through the full middleware stack.

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{post_json, post_raw, test_app};

async fn sum_ok(numbers: serde_json::Value) -> serde_json::Value {
    let res = post_json(test_app(), "/api/sum", json!({ "numbers": numbers })).await;
    assert_eq!(res.status, StatusCode::OK, "body: {}", res.text);
    assert_eq!(res.body["success"], json!(true));
    assert!(res.body["timestamp"].is_string());
    res.body["data"].clone()
}

#[tokio::test]
async fn test_sum_positive_numbers() {
    let data = sum_ok(json!([1, 2, 3, 4, 5])).await;
    assert_eq!(data["sum"], json!(15));
    assert_eq!(data["count"], json!(5));
    assert_eq!(data["numbers"], json!([1, 2, 3, 4, 5]));
}

#[tokio::test]
async fn test_sum_negative_numbers() {
    let data = sum_ok(json!([-1, -2, -3])).await;
    assert_eq!(data["sum"], json!(-6));
    assert_eq!(data["count"], json!(3));
}

#[tokio::test]
async fn test_sum_mixed_numbers() {
    let data = sum_ok(json!([10, -5, 3.5, -2.5])).await;
    assert_eq!(data["sum"], json!(6));
    assert_eq!(data["count"], json!(4));
    assert_eq!(data["numbers"], json!([10, -5, 3.5, -2.5]));
}

#[tokio::test]
async fn test_sum_single_number() {
    let data = sum_ok(json!([42])).await;
    assert_eq!(data["sum"], json!(42));
    assert_eq!(data["count"], json!(1));
}

#[tokio::test]
async fn test_sum_preserves_order_and_duplicates() {
    let data = sum_ok(json!([3, 1, 3, 2])).await;
    assert_eq!(data["numbers"], json!([3, 1, 3, 2]));
}

#[tokio::test]
async fn test_sum_accepts_exactly_1000_numbers() {
    let numbers = vec![1; 1000];
    let data = sum_ok(json!(numbers)).await;
    assert_eq!(data["sum"], json!(1000));
    assert_eq!(data["count"], json!(1000));
}

#[tokio::test]
async fn test_empty_array_rejected() {
    let res = post_json(test_app(), "/api/sum", json!({ "numbers": [] })).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.body,
        json!({
            "success": false,
            "error": "Validation failed",
            "details": ["Array must contain at least one number"],
        })
    );
}

#[tokio::test]
async fn test_oversized_array_rejected() {
    let numbers = vec![1; 1001];
    let res = post_json(test_app(), "/api/sum", json!({ "numbers": numbers })).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.body["details"],
        json!(["Array can contain at most 1000 numbers"])
    );
}

#[tokio::test]
async fn test_missing_field_rejected() {
    let res = post_json(test_app(), "/api/sum", json!({})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["success"], json!(false));
    assert_eq!(res.body["details"], json!(["Numbers array is required"]));
}

#[tokio::test]
async fn test_empty_body_is_missing_field() {
    let res = post_raw(test_app(), "/api/sum", Vec::new()).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["details"], json!(["Numbers array is required"]));
}

#[tokio::test]
async fn test_non_array_rejected() {
    let res = post_json(test_app(), "/api/sum", json!({ "numbers": "1,2,3" })).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["details"], json!(["Numbers must be an array"]));
}

#[tokio::test]
async fn test_invalid_types_rejected() {
    let res = post_json(test_app(), "/api/sum", json!({ "numbers": [1, "two", 3] })).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["success"], json!(false));
    assert_eq!(res.body["error"], json!("Validation failed"));
    assert_eq!(res.body["details"], json!(["\"numbers[1]\" must be a number"]));
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let res = post_raw(test_app(), "/api/sum", "{\"numbers\": [1, 2").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], json!("Validation failed"));
}

#[tokio::test]
async fn test_overflow_returns_500() {
    let res = post_json(
        test_app(),
        "/api/sum",
        json!({ "numbers": [9007199254740991_i64, 1] }),
    )
    .await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body["success"], json!(false));
    assert_eq!(res.body["error"], json!("Sum too large to calculate safely"));
    assert!(res.body["timestamp"].is_string());
    assert!(res.body.get("data").is_none());
}

#[tokio::test]
async fn test_intermediate_overflow_returns_500() {
    let res = post_json(
        test_app(),
        "/api/sum",
        json!({ "numbers": [9007199254740991_i64, 1, -2] }),
    )
    .await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body["error"], json!("Sum too large to calculate safely"));
}

#[tokio::test]
async fn test_identical_requests_identical_responses() {
    let body = json!({ "numbers": [1.25, 2, -7] });
    let mut first = post_json(test_app(), "/api/sum", body.clone()).await.body;
    let mut second = post_json(test_app(), "/api/sum", body).await.body;
    first.as_object_mut().unwrap().remove("timestamp");
    second.as_object_mut().unwrap().remove("timestamp");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_trailing_slash_accepted() {
    let res = post_json(test_app(), "/api/sum/", json!({ "numbers": [1, 2, 3, 4, 5] })).await;
    assert_eq!(res.status, StatusCode::OK, "body: {}", res.text);
    assert_eq!(res.body["data"]["sum"], json!(15));
}

// ==========================================
// HTTP 路由集成测试
// ==========================================
// 测试目标: 状态码与响应体（200 / 400 / 500）
// ==========================================

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::{json, Value};
use shift_optimizer::app::{router, AppState};
use shift_optimizer::config::AppConfig;
use shift_optimizer::{ApiError, ShiftApi};
use std::time::Duration;
use tower::ServiceExt;

// ==========================================
// 测试辅助函数
// ==========================================

fn create_test_app() -> axum::Router {
    router(AppState::from_config(&AppConfig::default()))
}

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate-shift")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ==========================================
// 测试用例
// ==========================================

#[tokio::test]
async fn test_generate_shift_ok() {
    let body = json!({
        "staff": [{"id": "a"}, {"id": "b"}, {"id": "c"}],
        "dates": ["2024-01-01", "2024-01-02"],
        "constraints": {"min_staff_per_day": 2, "max_staff_per_day": 2},
        "seed": 5
    });

    let (status, value) = send(create_test_app(), post_json(body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["success"], json!(true));
    assert_eq!(value["shifts"].as_array().unwrap().len(), 4);
    assert_eq!(value["stats"]["total_shifts"], json!(4));
}

#[tokio::test]
async fn test_validation_failure_is_bad_request() {
    let body = json!({"staff": [], "dates": ["2024-01-01"]});

    let (status, value) = send(create_test_app(), post_json(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["success"], json!(false));
    assert!(!value["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (status, value) = send(create_test_app(), post_json("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["success"], json!(false));
    assert!(value["error"].is_string());
}

#[tokio::test]
async fn test_malformed_date_is_bad_request() {
    let body = json!({"staff": [{"id": "a"}], "dates": ["01/02/2024"]});

    let (status, value) = send(create_test_app(), post_json(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["success"], json!(false));
}

#[tokio::test]
async fn test_negative_constraint_is_bad_request() {
    let body = json!({
        "staff": [{"id": "a"}],
        "dates": ["2024-01-01"],
        "constraints": {"min_staff_per_day": -1}
    });

    let (status, _) = send(create_test_app(), post_json(body.to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_timeout_error_is_internal_error() {
    let response = ApiError::Timeout(10).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["success"], json!(false));
    assert!(value["error"].as_str().unwrap().contains("10"));
}

#[tokio::test]
async fn test_generous_deadline_is_ok() {
    let state = AppState::new(ShiftApi::default(), Duration::from_secs(30));
    let body = json!({
        "staff": [{"id": "a"}, {"id": "b"}],
        "dates": ["2024-01-01"],
        "seed": 1
    });

    let (status, value) = send(router(state), post_json(body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["success"], json!(true));
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, value) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["status"], json!("ok"));
    assert_eq!(value["version"], json!(shift_optimizer::VERSION));
}

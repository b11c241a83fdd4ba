use super::common::*;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;
use tower::ServiceExt;

use crate::allocation::router::allocate_handler;
use crate::allocation::PayoutService;

#[tokio::test]
async fn allocate_handler_returns_the_payout_table() {
    let service = Arc::new(PayoutService::new());

    let response = allocate_handler(
        State(service),
        axum::Json(request(100, [1, 0, 0, 0, 0])),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("total_revenue"), Some(&Value::from(45_000)));
    assert_eq!(payload.get("base_rate"), Some(&Value::from(45_000)));
    assert_eq!(payload.get("remainder"), Some(&Value::from(0)));
}

#[tokio::test]
async fn allocate_handler_lists_every_intake_reason() {
    let service = Arc::new(PayoutService::new());

    let response = allocate_handler(
        State(service),
        axum::Json(request(-1, [0, 0, -4, 0, 0])),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let errors = payload
        .get("errors")
        .and_then(Value::as_array)
        .expect("errors array");
    assert_eq!(errors.len(), 2);
    assert!(errors[0]
        .as_str()
        .unwrap_or_default()
        .contains("patient count"));
}

#[tokio::test]
async fn allocate_route_accepts_json_payloads() {
    let router = service_router();

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/payout/allocations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&request(10, [1, 1, 1, 1, 1])).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("total_paid"), Some(&Value::from(4_500)));
    let lines = payload
        .get("lines")
        .and_then(Value::as_array)
        .expect("lines array");
    assert_eq!(lines.len(), 5);
}

#[tokio::test]
async fn allocate_route_rejects_unstaffed_payloads() {
    let router = service_router();

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/payout/allocations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&zero_staff_request(10)).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let errors = payload
        .get("errors")
        .and_then(Value::as_array)
        .expect("errors array");
    assert!(errors
        .iter()
        .any(|reason| reason.as_str().unwrap_or_default()
            == "at least one staff member required"));
}

#[tokio::test]
async fn policy_route_exposes_the_fixed_parameters() {
    let router = service_router();

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/payout/policy")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("per_patient_rate"), Some(&Value::from(450)));
    assert_eq!(payload.get("base_role"), Some(&Value::from("RN4")));
    assert!(payload
        .get("rate_relations")
        .and_then(Value::as_object)
        .is_some_and(|relations| relations.len() == 4));
}

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{
    PayoutRequest, StaffRole, PN1_HALF_CUT, RN1_HALF_LIFT, RN2_STEP_DOWN, RN3_STEP_DOWN,
};
use super::engine::search::{BASE_STEP, SEARCH_RADIUS};
use super::engine::PER_PATIENT_RATE;
use super::service::{PayoutService, PayoutServiceError};

/// Router builder exposing HTTP endpoints for the allocation engine.
pub fn payout_router(service: Arc<PayoutService>) -> Router {
    Router::new()
        .route("/api/v1/payout/allocations", post(allocate_handler))
        .route("/api/v1/payout/policy", get(policy_handler))
        .with_state(service)
}

pub(crate) async fn allocate_handler(
    State(service): State<Arc<PayoutService>>,
    axum::Json(request): axum::Json<PayoutRequest>,
) -> Response {
    match service.solve(&request) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(PayoutServiceError::Intake(rejection)) => {
            let payload = json!({
                "errors": rejection.reasons(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(PayoutServiceError::Engine(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

/// Read-only view of the fixed policy parameters, for display clients.
pub(crate) async fn policy_handler() -> axum::Json<serde_json::Value> {
    axum::Json(json!({
        "per_patient_rate": PER_PATIENT_RATE,
        "base_role": StaffRole::Rn4.label(),
        "base_rate_parity": BASE_STEP,
        "search_radius": SEARCH_RADIUS,
        "rate_relations": {
            "RN3": format!("base - {RN3_STEP_DOWN}"),
            "RN2": format!("base - {RN2_STEP_DOWN}"),
            "RN1": format!("(base + {RN1_HALF_LIFT}) / 2"),
            "PN1": format!("(base - {PN1_HALF_CUT}) / 2"),
        },
    }))
}

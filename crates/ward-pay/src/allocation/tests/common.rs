use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::allocation::domain::{PayoutRequest, StaffingProfile};
use crate::allocation::engine::AllocationEngine;
use crate::allocation::service::PayoutService;
use crate::allocation::{payout_router, IntakeGuard};

pub(super) fn request(patients: i64, counts: [i64; 5]) -> PayoutRequest {
    let [rn4_count, rn3_count, rn2_count, rn1_count, pn1_count] = counts;
    PayoutRequest {
        patient_count: patients,
        rn4_count,
        rn3_count,
        rn2_count,
        rn1_count,
        pn1_count,
    }
}

pub(super) fn profile(patients: u32, counts: [u32; 5]) -> StaffingProfile {
    let [rn4, rn3, rn2, rn1, pn1] = counts;
    StaffingProfile {
        patient_count: patients,
        rn4,
        rn3,
        rn2,
        rn1,
        pn1,
    }
}

pub(super) fn zero_staff_request(patients: i64) -> PayoutRequest {
    request(patients, [0, 0, 0, 0, 0])
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard
}

pub(super) fn engine() -> AllocationEngine {
    AllocationEngine
}

pub(super) fn service_router() -> axum::Router {
    payout_router(Arc::new(PayoutService::new()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

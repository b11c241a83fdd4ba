//! Staff payout allocation: intake validation, the rate engine, and the
//! HTTP surface over both.

pub mod domain;
pub(crate) mod engine;
pub(crate) mod intake;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AllocationOutcome, PayoutRequest, PolicyWarning, RateSet, RoleLine, StaffRole, StaffingProfile,
    TopUp,
};
pub use engine::{AllocationEngine, SolveError, PER_PATIENT_RATE};
pub use intake::{IntakeGuard, IntakeRejection, IntakeViolation};
pub use router::payout_router;
pub use service::{PayoutService, PayoutServiceError};

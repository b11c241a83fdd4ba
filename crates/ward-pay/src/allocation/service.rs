use tracing::{debug, warn};

use super::domain::{AllocationOutcome, PayoutRequest};
use super::engine::{AllocationEngine, SolveError};
use super::intake::{IntakeGuard, IntakeRejection};

/// Facade composing the intake guard and the allocation engine. Stateless,
/// so concurrent callers share one instance freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayoutService {
    guard: IntakeGuard,
    engine: AllocationEngine,
}

#[derive(Debug, thiserror::Error)]
pub enum PayoutServiceError {
    #[error("invalid payout request: {0}")]
    Intake(#[from] IntakeRejection),
    #[error("allocation failed: {0}")]
    Engine(#[from] SolveError),
}

impl PayoutService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solve(&self, request: &PayoutRequest) -> Result<AllocationOutcome, PayoutServiceError> {
        let profile = self.guard.profile_from_request(request)?;
        let outcome = self.engine.solve(&profile)?;

        debug!(
            patients = profile.patient_count,
            staff = profile.total_staff(),
            base_rate = outcome.base_rate,
            remainder = outcome.remainder,
            "allocation solved"
        );
        for warning in &outcome.warnings {
            warn!(warning = %warning.summary(), "allocation policy warning");
        }

        Ok(outcome)
    }
}

use std::fmt;

use super::domain::{PayoutRequest, StaffRole, StaffingProfile};

/// Individual reasons a submission can be refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("patient count must be a non-negative integer (found {found})")]
    NegativePatientCount { found: i64 },
    #[error("patient count {found} exceeds the supported range")]
    PatientCountOutOfRange { found: i64 },
    #[error("{role} headcount must be a non-negative integer (found {found})")]
    NegativeHeadcount { role: StaffRole, found: i64 },
    #[error("{role} headcount {found} exceeds the supported range")]
    HeadcountOutOfRange { role: StaffRole, found: i64 },
    #[error("at least one staff member required")]
    NoStaff,
}

/// Everything wrong with one submission, reported together so the caller
/// can render the complete list instead of fixing issues one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeRejection {
    pub issues: Vec<IntakeViolation>,
}

impl IntakeRejection {
    pub fn reasons(&self) -> Vec<String> {
        self.issues.iter().map(|issue| issue.to_string()).collect()
    }
}

impl fmt::Display for IntakeRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reasons().join("; "))
    }
}

impl std::error::Error for IntakeRejection {}

/// Guard responsible for producing `StaffingProfile` instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Convert an inbound request into a validated staffing profile,
    /// collecting every violation.
    pub fn profile_from_request(
        &self,
        request: &PayoutRequest,
    ) -> Result<StaffingProfile, IntakeRejection> {
        let mut issues = Vec::new();

        let patient_count = match u32::try_from(request.patient_count) {
            Ok(count) => count,
            Err(_) => {
                issues.push(if request.patient_count < 0 {
                    IntakeViolation::NegativePatientCount {
                        found: request.patient_count,
                    }
                } else {
                    IntakeViolation::PatientCountOutOfRange {
                        found: request.patient_count,
                    }
                });
                0
            }
        };

        let mut counts = [0u32; 5];
        let mut counts_valid = true;
        for (slot, (role, found)) in counts.iter_mut().zip(request.headcounts()) {
            match u32::try_from(found) {
                Ok(count) => *slot = count,
                Err(_) => {
                    counts_valid = false;
                    issues.push(if found < 0 {
                        IntakeViolation::NegativeHeadcount { role, found }
                    } else {
                        IntakeViolation::HeadcountOutOfRange { role, found }
                    });
                }
            }
        }

        if counts_valid && counts.iter().all(|count| *count == 0) {
            issues.push(IntakeViolation::NoStaff);
        }

        if !issues.is_empty() {
            return Err(IntakeRejection { issues });
        }

        let [rn4, rn3, rn2, rn1, pn1] = counts;
        Ok(StaffingProfile {
            patient_count,
            rn4,
            rn3,
            rn2,
            rn1,
            pn1,
        })
    }
}

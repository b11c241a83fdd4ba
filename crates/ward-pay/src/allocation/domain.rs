use std::fmt;

use serde::{Deserialize, Serialize};

/// RN3's per-person rate sits this far below the base rate.
pub const RN3_STEP_DOWN: i64 = 100;
/// RN2's per-person rate sits this far below the base rate.
pub const RN2_STEP_DOWN: i64 = 250;
/// Added to the base rate before halving for RN1.
pub const RN1_HALF_LIFT: i64 = 50;
/// Subtracted from the base rate before halving for PN1.
pub const PN1_HALF_CUT: i64 = 150;

/// Fixed staff categories paid out of the revenue pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Rn4,
    Rn3,
    Rn2,
    Rn1,
    Pn1,
}

impl StaffRole {
    /// Payout table ordering: senior registered nurses first, PN1 last.
    pub const ALL: [StaffRole; 5] = [
        StaffRole::Rn4,
        StaffRole::Rn3,
        StaffRole::Rn2,
        StaffRole::Rn1,
        StaffRole::Pn1,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            StaffRole::Rn4 => "RN4",
            StaffRole::Rn3 => "RN3",
            StaffRole::Rn2 => "RN2",
            StaffRole::Rn1 => "RN1",
            StaffRole::Pn1 => "PN1",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw caller submission. Counts are signed so out-of-range input reaches
/// the intake guard instead of dying inside the deserializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRequest {
    pub patient_count: i64,
    pub rn4_count: i64,
    pub rn3_count: i64,
    pub rn2_count: i64,
    pub rn1_count: i64,
    pub pn1_count: i64,
}

impl PayoutRequest {
    pub fn headcounts(&self) -> [(StaffRole, i64); 5] {
        [
            (StaffRole::Rn4, self.rn4_count),
            (StaffRole::Rn3, self.rn3_count),
            (StaffRole::Rn2, self.rn2_count),
            (StaffRole::Rn1, self.rn1_count),
            (StaffRole::Pn1, self.pn1_count),
        ]
    }
}

/// Validated staffing picture. Only the intake guard builds these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingProfile {
    pub patient_count: u32,
    pub rn4: u32,
    pub rn3: u32,
    pub rn2: u32,
    pub rn1: u32,
    pub pn1: u32,
}

impl StaffingProfile {
    pub fn headcount(&self, role: StaffRole) -> u32 {
        match role {
            StaffRole::Rn4 => self.rn4,
            StaffRole::Rn3 => self.rn3,
            StaffRole::Rn2 => self.rn2,
            StaffRole::Rn1 => self.rn1,
            StaffRole::Pn1 => self.pn1,
        }
    }

    pub fn total_staff(&self) -> u32 {
        self.rn4 + self.rn3 + self.rn2 + self.rn1 + self.pn1
    }
}

/// Per-person rates derived from the single free variable, the base rate
/// (RN4's rate for the period). The base must be even so the two halved
/// rates stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSet {
    pub rn4: i64,
    pub rn3: i64,
    pub rn2: i64,
    pub rn1: i64,
    pub pn1: i64,
}

impl RateSet {
    pub fn derive(base_rate: i64) -> Self {
        Self {
            rn4: base_rate,
            rn3: base_rate - RN3_STEP_DOWN,
            rn2: base_rate - RN2_STEP_DOWN,
            rn1: (base_rate + RN1_HALF_LIFT).div_euclid(2),
            pn1: (base_rate - PN1_HALF_CUT).div_euclid(2),
        }
    }

    pub fn rate_for(&self, role: StaffRole) -> i64 {
        match role {
            StaffRole::Rn4 => self.rn4,
            StaffRole::Rn3 => self.rn3,
            StaffRole::Rn2 => self.rn2,
            StaffRole::Rn1 => self.rn1,
            StaffRole::Pn1 => self.pn1,
        }
    }

    pub(crate) fn with_pn1_top_up(mut self, per_person: i64) -> Self {
        self.pn1 += per_person;
        self
    }
}

/// One row of the payout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleLine {
    pub role: StaffRole,
    pub headcount: u32,
    pub rate: i64,
    pub subtotal: i64,
}

/// Flat PN1 addition that consumes the remainder left by the base payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopUp {
    pub per_person: i64,
    pub absorbed: i64,
    pub dropped: i64,
}

/// Business-policy signals surfaced next to a successful outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyWarning {
    NegativeRate { role: StaffRole, rate: i64 },
    UnabsorbedRemainder { missing: i64 },
}

impl PolicyWarning {
    pub fn summary(&self) -> String {
        match self {
            PolicyWarning::NegativeRate { role, rate } => {
                format!("{role} rate is negative ({rate}); review patient load vs. staffing mix")
            }
            PolicyWarning::UnabsorbedRemainder { missing } => {
                format!("{missing} of the pool is unallocated and no PN1 staff exist to absorb it")
            }
        }
    }
}

/// Full allocation result: the payout table plus diagnostic totals.
/// Rates in `lines` are final, so PN1's includes any top-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    pub total_revenue: i64,
    pub base_rate: i64,
    pub lines: Vec<RoleLine>,
    pub total_paid: i64,
    pub remainder: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_up: Option<TopUp>,
    pub warnings: Vec<PolicyWarning>,
}

impl AllocationOutcome {
    pub fn line(&self, role: StaffRole) -> Option<&RoleLine> {
        self.lines.iter().find(|line| line.role == role)
    }
}

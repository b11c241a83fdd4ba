pub(crate) mod search;
pub(crate) mod topup;

use super::domain::{
    AllocationOutcome, PolicyWarning, RateSet, RoleLine, StaffRole, StaffingProfile,
};

/// System-wide revenue per treated patient, identical for every shift.
pub const PER_PATIENT_RATE: i64 = 450;

/// Computation failures distinct from intake validation: the inputs may be
/// individually valid yet jointly unsolvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("no staffed role carries payout weight")]
    ZeroWeight,
    #[error("no feasible base rate within {radius} of the estimate {estimate}")]
    NoFeasibleBase { estimate: i64, radius: i64 },
}

/// Stateless engine that turns a staffing profile into a payout table.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllocationEngine;

impl AllocationEngine {
    pub fn solve(&self, profile: &StaffingProfile) -> Result<AllocationOutcome, SolveError> {
        let total_revenue = i64::from(profile.patient_count) * PER_PATIENT_RATE;

        let base_rate = search::best_feasible_base(profile, total_revenue)?;
        let base_rates = RateSet::derive(base_rate);
        let base_paid = search::payout_at(profile, &base_rates);

        // Feasibility of the chosen base guarantees this is non-negative.
        let unallocated = total_revenue - base_paid;
        let top_up = topup::redistribute(unallocated, profile.pn1);

        let rates = match top_up {
            Some(top_up) => base_rates.with_pn1_top_up(top_up.per_person),
            None => base_rates,
        };

        let lines: Vec<RoleLine> = StaffRole::ALL
            .into_iter()
            .map(|role| {
                let headcount = profile.headcount(role);
                let rate = rates.rate_for(role);
                RoleLine {
                    role,
                    headcount,
                    rate,
                    subtotal: rate * i64::from(headcount),
                }
            })
            .collect();

        let total_paid = base_paid + top_up.map_or(0, |top_up| top_up.absorbed);
        let remainder = total_revenue - total_paid;

        let mut warnings: Vec<PolicyWarning> = StaffRole::ALL
            .into_iter()
            .filter_map(|role| {
                let rate = rates.rate_for(role);
                (rate < 0).then_some(PolicyWarning::NegativeRate { role, rate })
            })
            .collect();
        if profile.pn1 == 0 && remainder > 0 {
            warnings.push(PolicyWarning::UnabsorbedRemainder { missing: remainder });
        }

        Ok(AllocationOutcome {
            total_revenue,
            base_rate,
            lines,
            total_paid,
            remainder,
            top_up,
            warnings,
        })
    }
}

//! Base-rate selection: a linear estimate followed by a bounded
//! neighborhood search over even candidates.
//!
//! Strategy: from the even integer at or below the floored estimate, scan
//! offsets 0, -2, +2, -4, +4, ... out to `SEARCH_RADIUS`, keeping the
//! feasible candidate with the smallest gap to the pool. A gap of zero
//! ends the scan immediately. Payout moves by twice the role weight per
//! step, so the window is generous enough that exhaustion is effectively
//! unreachable for intended input ranges.

use super::super::domain::{
    RateSet, StaffRole, StaffingProfile, PN1_HALF_CUT, RN1_HALF_LIFT, RN2_STEP_DOWN, RN3_STEP_DOWN,
};
use super::SolveError;

/// How far the neighborhood scan strays from the estimate.
pub const SEARCH_RADIUS: i64 = 500;
/// Candidate spacing; even bases keep the halved rates exact.
pub const BASE_STEP: i64 = 2;

/// Exact integer payout of the whole staffing profile under `rates`.
pub(crate) fn payout_at(profile: &StaffingProfile, rates: &RateSet) -> i64 {
    StaffRole::ALL
        .into_iter()
        .map(|role| rates.rate_for(role) * i64::from(profile.headcount(role)))
        .sum()
}

/// Unconstrained real estimate of the base rate. The pool is linear in the
/// base B: payout = A*B + C with A the per-role weight sum (halved-rate
/// roles count half) and C the fixed offsets.
pub(crate) fn base_estimate(profile: &StaffingProfile, revenue: i64) -> Result<f64, SolveError> {
    let twice_weight = 2 * (i64::from(profile.rn4) + i64::from(profile.rn3) + i64::from(profile.rn2))
        + i64::from(profile.rn1)
        + i64::from(profile.pn1);
    if twice_weight == 0 {
        return Err(SolveError::ZeroWeight);
    }

    let offset = -RN3_STEP_DOWN * i64::from(profile.rn3) - RN2_STEP_DOWN * i64::from(profile.rn2)
        + (RN1_HALF_LIFT / 2) * i64::from(profile.rn1)
        - (PN1_HALF_CUT / 2) * i64::from(profile.pn1);

    Ok((revenue - offset) as f64 * 2.0 / twice_weight as f64)
}

/// The largest even base whose exact payout stays within the pool,
/// located by scanning the neighborhood of the estimate.
pub(crate) fn best_feasible_base(
    profile: &StaffingProfile,
    revenue: i64,
) -> Result<i64, SolveError> {
    let estimate = base_estimate(profile, revenue)?;
    let anchor = even_floor(estimate);

    let mut candidates = Vec::with_capacity((SEARCH_RADIUS / BASE_STEP) as usize * 2 + 1);
    candidates.push(anchor);
    let mut offset = BASE_STEP;
    while offset <= SEARCH_RADIUS {
        candidates.push(anchor - offset);
        candidates.push(anchor + offset);
        offset += BASE_STEP;
    }

    let mut best: Option<(i64, i64)> = None;
    for candidate in candidates {
        let payout = payout_at(profile, &RateSet::derive(candidate));
        if payout > revenue {
            continue;
        }
        let gap = revenue - payout;
        if gap == 0 {
            return Ok(candidate);
        }
        if best.map_or(true, |(smallest, _)| gap < smallest) {
            best = Some((gap, candidate));
        }
    }

    best.map(|(_, base)| base).ok_or(SolveError::NoFeasibleBase {
        estimate: anchor,
        radius: SEARCH_RADIUS,
    })
}

fn even_floor(value: f64) -> i64 {
    let floored = value.floor() as i64;
    if floored.rem_euclid(2) == 0 {
        floored
    } else {
        floored - 1
    }
}

use super::super::domain::TopUp;

/// Spread the unallocated remainder across PN1 staff as a flat per-person
/// addition. Whatever does not divide evenly is dropped, never
/// redistributed further; with no PN1 staff the remainder stays whole.
pub(crate) fn redistribute(remainder: i64, pn1_headcount: u32) -> Option<TopUp> {
    if remainder <= 0 || pn1_headcount == 0 {
        return None;
    }

    let headcount = i64::from(pn1_headcount);
    let per_person = remainder / headcount;
    let absorbed = per_person * headcount;

    Some(TopUp {
        per_person,
        absorbed,
        dropped: remainder - absorbed,
    })
}

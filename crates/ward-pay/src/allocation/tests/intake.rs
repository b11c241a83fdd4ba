use super::common::*;

use crate::allocation::intake::IntakeViolation;
use crate::allocation::StaffRole;

#[test]
fn accepts_a_fully_staffed_request() {
    let profile = guard()
        .profile_from_request(&request(42, [1, 2, 3, 4, 5]))
        .expect("valid request");

    assert_eq!(profile.patient_count, 42);
    assert_eq!(profile.rn4, 1);
    assert_eq!(profile.rn3, 2);
    assert_eq!(profile.rn2, 3);
    assert_eq!(profile.rn1, 4);
    assert_eq!(profile.pn1, 5);
    assert_eq!(profile.total_staff(), 15);
}

#[test]
fn rejects_when_no_staff_present() {
    let rejection = guard()
        .profile_from_request(&zero_staff_request(10))
        .expect_err("no staff to pay");

    assert_eq!(rejection.issues, vec![IntakeViolation::NoStaff]);
    assert!(rejection.to_string().contains("at least one staff member required"));
}

#[test]
fn collects_every_violation_in_one_pass() {
    let rejection = guard()
        .profile_from_request(&request(-3, [1, 0, -2, 0, 0]))
        .expect_err("two violations present");

    assert_eq!(
        rejection.issues,
        vec![
            IntakeViolation::NegativePatientCount { found: -3 },
            IntakeViolation::NegativeHeadcount {
                role: StaffRole::Rn2,
                found: -2,
            },
        ]
    );
    assert_eq!(rejection.reasons().len(), 2);
}

#[test]
fn rejects_counts_beyond_the_supported_range() {
    let oversized = i64::from(u32::MAX) + 1;
    let rejection = guard()
        .profile_from_request(&request(oversized, [oversized, 0, 0, 0, 1]))
        .expect_err("values exceed u32");

    assert_eq!(
        rejection.issues,
        vec![
            IntakeViolation::PatientCountOutOfRange { found: oversized },
            IntakeViolation::HeadcountOutOfRange {
                role: StaffRole::Rn4,
                found: oversized,
            },
        ]
    );
}

#[test]
fn zero_patients_with_staff_is_acceptable() {
    let profile = guard()
        .profile_from_request(&request(0, [2, 0, 0, 0, 0]))
        .expect("zero revenue is valid input");

    assert_eq!(profile.patient_count, 0);
    assert_eq!(profile.total_staff(), 2);
}

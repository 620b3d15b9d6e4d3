//! Re-enrollment eligibility rules.
//!
//! A decision is reached in stages so the store only reads what it needs:
//!
//! ```text
//! department_gate ──deny──▶ DepartmentMismatch
//!        │
//! already enrolled in target session? ──deny──▶ AlreadyEnrolledInSession
//!        │
//! evaluate_history(attempts for the same course)
//!        ├─ no attempts              ─▶ allow (first attempt)
//!        ├─ can_retake  = no attempt reached PASS_MARK
//!        ├─ can_improve = latest attempt is in the student's own session
//!        │                and scored below IMPROVEMENT_CEILING
//!        └─ allow = can_retake || can_improve
//! ```
//!
//! `can_retake` and `can_improve` overlap and are both kept on the decision.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Course, EnrollmentAttempt, Student};
use crate::enums::Ineligibility;

/// Total at which an attempt counts as passed.
pub const PASS_MARK: i64 = 40;

/// An own-session attempt below this total may be re-taken for improvement.
pub const IMPROVEMENT_CEILING: i64 = 60;

/// Outcome of an eligibility check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EligibilityDecision {
    pub allowed: bool,
    /// No earlier attempt was found for the course.
    pub first_attempt: bool,
    /// No earlier attempt passed.
    pub can_retake: bool,
    /// The latest attempt is an improvable own-session attempt.
    pub can_improve: bool,
    /// Set whenever `allowed` is false.
    pub reason: Option<Ineligibility>,
}

impl EligibilityDecision {
    /// A denial raised before the attempt history is consulted.
    #[must_use]
    pub const fn denied(reason: Ineligibility) -> Self {
        Self {
            allowed: false,
            first_attempt: false,
            can_retake: false,
            can_improve: false,
            reason: Some(reason),
        }
    }

    const fn first_attempt() -> Self {
        Self {
            allowed: true,
            first_attempt: true,
            can_retake: true,
            can_improve: false,
            reason: None,
        }
    }
}

/// Students may only take courses of their own department.
#[must_use]
pub fn department_gate(student: &Student, course: &Course) -> Option<EligibilityDecision> {
    (student.department_id != course.department_id)
        .then(|| EligibilityDecision::denied(Ineligibility::DepartmentMismatch))
}

/// Decide from the student's earlier attempts at the target course.
///
/// `attempts` may arrive in any order; the latest attempt is the one with the
/// greatest session label.
#[must_use]
pub fn evaluate_history(student: &Student, attempts: &[EnrollmentAttempt]) -> EligibilityDecision {
    let Some(latest) = attempts.iter().max_by(|a, b| a.session.cmp(&b.session)) else {
        return EligibilityDecision::first_attempt();
    };

    let can_retake = !attempts.iter().any(|a| a.total_marks() >= PASS_MARK);
    let can_improve =
        latest.session == student.session && latest.total_marks() < IMPROVEMENT_CEILING;

    let allowed = can_retake || can_improve;
    EligibilityDecision {
        allowed,
        first_attempt: false,
        can_retake,
        can_improve,
        reason: (!allowed).then_some(Ineligibility::AlreadyPassed),
    }
}

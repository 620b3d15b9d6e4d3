//! Response types returned as JSON by `regr` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::eligibility::EligibilityDecision;
use crate::entities::{CourseSession, Enrollment};

/// Response from `regr eligibility`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EligibilityResponse {
    pub student_id: String,
    pub course_session_id: String,
    pub decision: EligibilityDecision,
}

/// Response from `regr enroll`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnrollResponse {
    pub enrollment: Enrollment,
    pub decision: EligibilityDecision,
}

/// Response from `regr roster create`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RosterResponse {
    pub course_session: CourseSession,
    pub created: Vec<Enrollment>,
    /// Matching students that already held an enrollment in the session.
    pub skipped: u32,
}

/// Response from `regr marks set` and `regr marks import`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MarksUpdateResponse {
    pub updated: Vec<Enrollment>,
}

/// One row of `regr overview`: an enrollment with its course context and
/// whether the student may enroll in the latest offering again.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnrollmentOverview {
    pub enrollment_id: String,
    pub course_id: String,
    pub course_code: String,
    pub course_name: String,
    pub session: String,
    pub class_assessment_marks: i64,
    pub total_marks: i64,
    pub can_re_enroll: bool,
}

/// Response from `regr import`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportResponse {
    pub departments: u32,
    pub users: u32,
    pub courses: u32,
    pub course_sessions: u32,
    /// Enrollments created by cohort rosters of imported offerings.
    pub enrollments: u32,
}

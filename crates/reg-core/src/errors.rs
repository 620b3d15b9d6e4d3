//! Domain error types for Registrar.
//!
//! Storage errors (`DatabaseError`) live in `reg-db`, which wraps these. The
//! CLI is where everything converges into `anyhow`.

use thiserror::Error;

use crate::enums::Ineligibility;

/// Errors raised by the enrollment lifecycle: enrolling, roster creation and
/// mark entry.
#[derive(Debug, Error)]
pub enum EnrollmentError {
    /// The acting user does not hold the student role.
    #[error("Only students can enroll in courses (user {user_id})")]
    NotAStudent { user_id: String },

    /// A student record is missing an academic field the engine reads.
    #[error("Student {user_id} has no {field} on record")]
    IncompleteStudentProfile {
        user_id: String,
        field: &'static str,
    },

    /// The eligibility check refused the enrollment.
    #[error("Student {student_id} is not eligible to enroll in {course_session_id}: {reason}")]
    NotEligible {
        student_id: String,
        course_session_id: String,
        reason: Ineligibility,
    },

    /// An enrollment already exists for this (student, course session) pair.
    #[error("Student {student_id} is already enrolled in {course_session_id}")]
    DuplicateEnrollment {
        student_id: String,
        course_session_id: String,
    },

    /// Mark entry referenced an enrollment that does not exist.
    #[error("Enrollment not found: {id}")]
    EnrollmentNotFound { id: String },

    /// A batch mark update contained an enrollment of another course session.
    #[error("Enrollment {enrollment_id} does not belong to {course_session_id}")]
    EnrollmentOutsideSession {
        enrollment_id: String,
        course_session_id: String,
    },

    /// The actor is neither the owning teacher nor an administrator. `target`
    /// is the enrollment, or the course session for a batch update.
    #[error("User {user_id} may not update marks of {target}")]
    UnauthorizedMarkUpdate { user_id: String, target: String },

    /// The actor may not view the roster of this course session.
    #[error("User {user_id} may not view the roster of {course_session_id}")]
    UnauthorizedRosterAccess {
        user_id: String,
        course_session_id: String,
    },

    /// No enrollment exists for the requested student/course combination.
    #[error("No enrollment data for student {student_id} in course {course_id}")]
    NoEnrollmentData {
        student_id: String,
        course_id: String,
    },

    /// A mark component is outside its allowed range.
    #[error("Invalid {field}: {value} (allowed 0..={max})")]
    InvalidMarks {
        field: &'static str,
        value: i64,
        max: i64,
    },
}

/// Errors from the grade table lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GradeError {
    /// The total is below the lowest threshold of the grade table.
    #[error("Invalid total marks: {0} (must be >= 0)")]
    NegativeTotal(i64),
}

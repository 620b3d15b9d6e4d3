use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::EnrollmentError;

/// A student's enrollment in one course session.
///
/// At most one exists per (student, course session); a student may hold many
/// for the same course across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Enrollment {
    pub id: String,
    pub course_session_id: String,
    pub student_id: String,
    /// Finalized (fees paid). Not read by the eligibility rules.
    pub is_enrolled: bool,
    pub class_assessment_marks: i64,
    pub final_term_marks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Enrollment {
    #[must_use]
    pub const fn total_marks(&self) -> i64 {
        self.class_assessment_marks + self.final_term_marks
    }
}

/// One historical attempt at a course: an enrollment joined with the
/// session label and course of its course session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnrollmentAttempt {
    pub enrollment_id: String,
    pub course_session_id: String,
    pub course_id: String,
    pub session: String,
    pub class_assessment_marks: i64,
    pub final_term_marks: i64,
    pub created_at: DateTime<Utc>,
}

impl EnrollmentAttempt {
    #[must_use]
    pub const fn total_marks(&self) -> i64 {
        self.class_assessment_marks + self.final_term_marks
    }
}

/// Marks posted by a teacher for one enrollment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Marks {
    pub class_assessment_marks: i64,
    pub final_term_marks: i64,
}

impl Marks {
    pub const MAX_CLASS_ASSESSMENT: i64 = 30;
    pub const MAX_FINAL_TERM: i64 = 70;

    /// Check both components against their ranges.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError::InvalidMarks` naming the first offending field.
    pub const fn validate(&self) -> Result<(), EnrollmentError> {
        if self.class_assessment_marks < 0
            || self.class_assessment_marks > Self::MAX_CLASS_ASSESSMENT
        {
            return Err(EnrollmentError::InvalidMarks {
                field: "class_assessment_marks",
                value: self.class_assessment_marks,
                max: Self::MAX_CLASS_ASSESSMENT,
            });
        }
        if self.final_term_marks < 0 || self.final_term_marks > Self::MAX_FINAL_TERM {
            return Err(EnrollmentError::InvalidMarks {
                field: "final_term_marks",
                value: self.final_term_marks,
                max: Self::MAX_FINAL_TERM,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_at_bounds_are_valid() {
        let marks = Marks {
            class_assessment_marks: 30,
            final_term_marks: 70,
        };
        assert!(marks.validate().is_ok());
        let zero = Marks {
            class_assessment_marks: 0,
            final_term_marks: 0,
        };
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn class_assessment_over_thirty_rejected() {
        let marks = Marks {
            class_assessment_marks: 31,
            final_term_marks: 10,
        };
        let err = marks.validate().unwrap_err();
        let EnrollmentError::InvalidMarks { field, value, max } = err else {
            panic!("expected invalid marks");
        };
        assert_eq!((field, value, max), ("class_assessment_marks", 31, 30));
    }

    #[test]
    fn negative_final_term_rejected() {
        let marks = Marks {
            class_assessment_marks: 10,
            final_term_marks: -1,
        };
        let err = marks.validate().unwrap_err();
        let EnrollmentError::InvalidMarks { field, max, .. } = err else {
            panic!("expected invalid marks");
        };
        assert_eq!((field, max), ("final_term_marks", 70));
    }
}

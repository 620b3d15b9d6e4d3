//! Mark-to-grade lookup.
//!
//! The grade table is plain data: bands ordered by descending minimum total.
//! A total matches the first band whose minimum it reaches (`>=`). There is no
//! upper bound, so anything from 80 upwards is an A+.

use serde::Serialize;

use crate::enums::LetterGrade;
use crate::errors::GradeError;

/// One row of the grade table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeBand {
    /// Lowest total (CA + final) that earns this band.
    pub min: i64,
    pub letter: LetterGrade,
    pub gpa: f64,
    pub remark: &'static str,
}

/// Ordered descending by `min`; the last band starts at 0.
#[rustfmt::skip]
pub const GRADE_TABLE: &[GradeBand] = &[
    GradeBand { min: 80, letter: LetterGrade::APlus, gpa: 4.00, remark: "Outstanding" },
    GradeBand { min: 75, letter: LetterGrade::A, gpa: 3.75, remark: "Excellent" },
    GradeBand { min: 70, letter: LetterGrade::AMinus, gpa: 3.50, remark: "Very Good" },
    GradeBand { min: 65, letter: LetterGrade::BPlus, gpa: 3.25, remark: "Good" },
    GradeBand { min: 60, letter: LetterGrade::B, gpa: 3.00, remark: "Satisfactory" },
    GradeBand { min: 55, letter: LetterGrade::BMinus, gpa: 2.75, remark: "Below Satisfactory" },
    GradeBand { min: 50, letter: LetterGrade::CPlus, gpa: 2.50, remark: "Average" },
    GradeBand { min: 45, letter: LetterGrade::C, gpa: 2.25, remark: "Pass" },
    GradeBand { min: 40, letter: LetterGrade::D, gpa: 2.00, remark: "Poor" },
    GradeBand { min: 0, letter: LetterGrade::F, gpa: 0.00, remark: "Fail" },
];

/// Resolve a total mark to its grade band.
///
/// # Errors
///
/// Returns `GradeError::NegativeTotal` when `total` is below every threshold.
pub fn grade(total: i64) -> Result<&'static GradeBand, GradeError> {
    GRADE_TABLE
        .iter()
        .find(|band| total >= band.min)
        .ok_or(GradeError::NegativeTotal(total))
}

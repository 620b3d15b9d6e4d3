//! Best-attempt selection and semester CGPA aggregation.
//!
//! A semester report covers every catalog course of a year/semester, whether
//! or not the student enrolled in it. Courses without an attempt are reported
//! as "Not Enrolled" with GPA 0 and still count towards the credit total.

use std::cmp::Ordering;
use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Course, EnrollmentAttempt};
use crate::enums::LetterGrade;
use crate::errors::GradeError;
use crate::grading::grade;

pub const NOT_ENROLLED_REMARK: &str = "Not Enrolled";

/// Best attempt of a student at one course, with its grade.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BestResult {
    pub course_id: String,
    pub enrollment_id: String,
    pub course_session_id: String,
    pub session: String,
    pub class_assessment_marks: i64,
    pub final_term_marks: i64,
    pub total_marks: i64,
    pub grade: LetterGrade,
    pub gpa: f64,
    pub remark: String,
}

/// One row of a semester report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CourseResult {
    pub course_id: String,
    pub course_code: String,
    pub course_name: String,
    pub credit_hours: f64,
    /// `None` when the student never enrolled in the course.
    pub total_marks: Option<i64>,
    pub grade: LetterGrade,
    pub gpa: f64,
    pub remark: String,
    pub weighted_gpa: f64,
}

/// Per-course results and credit-weighted CGPA for one year/semester.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SemesterReport {
    pub student_id: String,
    pub year: u32,
    pub semester: u32,
    pub courses: Vec<CourseResult>,
    pub total_credit_hours: f64,
    /// Rounded to two decimals. 0 when the semester has no courses.
    pub cgpa: f64,
}

/// Order attempts so that the best one compares greatest: highest total,
/// then earliest session, then earliest creation.
fn rank(a: &EnrollmentAttempt, b: &EnrollmentAttempt) -> Ordering {
    a.total_marks()
        .cmp(&b.total_marks())
        .then_with(|| b.session.cmp(&a.session))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Pick the highest-scoring attempt. Ties go to the earliest session.
#[must_use]
pub fn best_attempt(attempts: &[EnrollmentAttempt]) -> Option<&EnrollmentAttempt> {
    attempts.iter().max_by(|a, b| rank(a, b))
}

/// Grade a chosen attempt.
///
/// # Errors
///
/// Returns `GradeError` if the attempt's total is negative.
pub fn best_result(attempt: &EnrollmentAttempt) -> Result<BestResult, GradeError> {
    let total = attempt.total_marks();
    let band = grade(total)?;
    Ok(BestResult {
        course_id: attempt.course_id.clone(),
        enrollment_id: attempt.enrollment_id.clone(),
        course_session_id: attempt.course_session_id.clone(),
        session: attempt.session.clone(),
        class_assessment_marks: attempt.class_assessment_marks,
        final_term_marks: attempt.final_term_marks,
        total_marks: total,
        grade: band.letter,
        gpa: band.gpa,
        remark: band.remark.to_string(),
    })
}

/// Result row for one course given its best attempt, if any.
///
/// # Errors
///
/// Returns `GradeError` if the attempt's total is negative.
pub fn course_result(
    course: &Course,
    best: Option<&EnrollmentAttempt>,
) -> Result<CourseResult, GradeError> {
    let (total_marks, letter, gpa, remark) = match best {
        Some(attempt) => {
            let total = attempt.total_marks();
            let band = grade(total)?;
            (Some(total), band.letter, band.gpa, band.remark)
        }
        None => (None, LetterGrade::F, 0.0, NOT_ENROLLED_REMARK),
    };
    Ok(CourseResult {
        course_id: course.id.clone(),
        course_code: course.code.clone(),
        course_name: course.name.clone(),
        credit_hours: course.credit,
        total_marks,
        grade: letter,
        gpa,
        remark: remark.to_string(),
        weighted_gpa: gpa * course.credit,
    })
}

/// Build a semester report from the term's catalog courses and every attempt
/// the student made at any of them.
///
/// # Errors
///
/// Returns `GradeError` if any best attempt has a negative total.
pub fn semester_report(
    student_id: &str,
    year: u32,
    semester: u32,
    courses: &[Course],
    attempts: &[EnrollmentAttempt],
) -> Result<SemesterReport, GradeError> {
    let mut by_course: HashMap<&str, Vec<EnrollmentAttempt>> = HashMap::new();
    for attempt in attempts {
        by_course
            .entry(attempt.course_id.as_str())
            .or_default()
            .push(attempt.clone());
    }

    let mut rows = Vec::with_capacity(courses.len());
    let mut weighted_total = 0.0;
    let mut credit_total = 0.0;
    for course in courses {
        let best = by_course
            .get(course.id.as_str())
            .and_then(|group| best_attempt(group));
        let row = course_result(course, best)?;
        weighted_total += row.weighted_gpa;
        credit_total += row.credit_hours;
        rows.push(row);
    }

    let cgpa = if credit_total > 0.0 {
        round2(weighted_total / credit_total)
    } else {
        0.0
    };

    Ok(SemesterReport {
        student_id: student_id.to_string(),
        year,
        semester,
        courses: rows,
        total_credit_hours: credit_total,
        cgpa,
    })
}

/// Round half away from zero to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

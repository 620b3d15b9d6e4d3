//! Eligibility checks and student-initiated enrollment.

use std::collections::HashMap;

use reg_core::eligibility::{EligibilityDecision, department_gate, evaluate_history};
use reg_core::entities::{Course, Student};
use reg_core::enums::Ineligibility;
use reg_core::errors::EnrollmentError;
use reg_core::responses::{EligibilityResponse, EnrollResponse, EnrollmentOverview};

use crate::error::DatabaseError;
use crate::service::RegService;

impl RegService {
    /// Decide whether `student` may enroll in the target course session.
    ///
    /// Department and duplicate checks run first; attempt history is only
    /// read when both pass.
    pub async fn can_enroll(
        &self,
        student: &Student,
        course_session_id: &str,
    ) -> Result<EligibilityDecision, DatabaseError> {
        let target = self.get_course_session(course_session_id).await?;
        let course = self.get_course(&target.course_id).await?;

        if let Some(denied) = department_gate(student, &course) {
            tracing::debug!(
                student_id = %student.id,
                course_session_id,
                "eligibility denied: department mismatch"
            );
            return Ok(denied);
        }

        if self
            .find_enrollment(&student.id, course_session_id)
            .await?
            .is_some()
        {
            tracing::debug!(
                student_id = %student.id,
                course_session_id,
                "eligibility denied: already enrolled in session"
            );
            return Ok(EligibilityDecision::denied(
                Ineligibility::AlreadyEnrolledInSession,
            ));
        }

        let attempts = self.list_attempts(&student.id, &course.id).await?;
        let decision = evaluate_history(student, &attempts);
        tracing::debug!(
            student_id = %student.id,
            course_session_id,
            attempts = attempts.len(),
            allowed = decision.allowed,
            can_retake = decision.can_retake,
            can_improve = decision.can_improve,
            "eligibility evaluated"
        );
        Ok(decision)
    }

    /// Eligibility of a user, by id, for one course session.
    pub async fn check_eligibility(
        &self,
        user_id: &str,
        course_session_id: &str,
    ) -> Result<EligibilityResponse, DatabaseError> {
        let student = self.get_student(user_id).await?;
        let decision = self.can_enroll(&student, course_session_id).await?;
        Ok(EligibilityResponse {
            student_id: student.id,
            course_session_id: course_session_id.to_string(),
            decision,
        })
    }

    /// Enroll a user in a course session after an eligibility check.
    ///
    /// # Errors
    ///
    /// - `NotAStudent` for non-student accounts.
    /// - `NotEligible` carrying the denial reason.
    /// - `DuplicateEnrollment` when a concurrent enrollment won the race.
    pub async fn enroll(
        &self,
        user_id: &str,
        course_session_id: &str,
    ) -> Result<EnrollResponse, DatabaseError> {
        let student = self.get_student(user_id).await?;
        let decision = self.can_enroll(&student, course_session_id).await?;

        if !decision.allowed {
            let reason = decision.reason.unwrap_or(Ineligibility::AlreadyPassed);
            return Err(EnrollmentError::NotEligible {
                student_id: student.id,
                course_session_id: course_session_id.to_string(),
                reason,
            }
            .into());
        }

        let enrollment = self
            .create_enrollment(&student.id, course_session_id)
            .await?;
        tracing::info!(
            enrollment_id = %enrollment.id,
            student_id = %student.id,
            course_session_id,
            first_attempt = decision.first_attempt,
            "enrollment created"
        );
        Ok(EnrollResponse {
            enrollment,
            decision,
        })
    }

    /// Enroll a user in the most recent offering of a course.
    pub async fn enroll_in_latest_offering(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<EnrollResponse, DatabaseError> {
        self.get_student(user_id).await?;
        let latest = self
            .latest_course_session(course_id)
            .await?
            .ok_or_else(|| {
                DatabaseError::InvalidState(format!("course {course_id} has no offerings"))
            })?;
        self.enroll(user_id, &latest.id).await
    }

    /// A student's enrollments, highest total first, each flagged with
    /// whether the latest offering of its course is open to them.
    pub async fn enrollment_overview(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<EnrollmentOverview>, DatabaseError> {
        let student = self.get_student(user_id).await?;
        let mut attempts = self.list_student_attempts(&student.id).await?;
        attempts.sort_by(|a, b| b.total_marks().cmp(&a.total_marks()));
        attempts.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

        let mut courses: HashMap<String, (Course, bool)> = HashMap::new();
        let mut rows = Vec::with_capacity(attempts.len());
        for attempt in attempts {
            if !courses.contains_key(&attempt.course_id) {
                let course = self.get_course(&attempt.course_id).await?;
                let can_re_enroll = match self.latest_course_session(&course.id).await? {
                    Some(latest) => self.can_enroll(&student, &latest.id).await?.allowed,
                    None => false,
                };
                courses.insert(attempt.course_id.clone(), (course, can_re_enroll));
            }
            let Some((course, can_re_enroll)) = courses.get(&attempt.course_id) else {
                continue;
            };
            rows.push(EnrollmentOverview {
                enrollment_id: attempt.enrollment_id.clone(),
                course_id: course.id.clone(),
                course_code: course.code.clone(),
                course_name: course.name.clone(),
                session: attempt.session.clone(),
                class_assessment_marks: attempt.class_assessment_marks,
                total_marks: attempt.total_marks(),
                can_re_enroll: *can_re_enroll,
            });
        }
        Ok(rows)
    }
}

//! Roster creation for a new offering and roster viewing.

use reg_core::entities::{Enrollment, User};
use reg_core::errors::EnrollmentError;
use reg_core::policy::can_manage_session;
use reg_core::responses::RosterResponse;

use crate::error::DatabaseError;
use crate::service::RegService;

impl RegService {
    /// Enroll every student of the offering's cohort: same department as the
    /// course, admitted with the offering's session label, currently at the
    /// course's year and semester. No eligibility check is applied.
    ///
    /// Students that already hold an enrollment in the offering are skipped.
    pub async fn enroll_all_eligible_students(
        &self,
        course_session_id: &str,
    ) -> Result<RosterResponse, DatabaseError> {
        let course_session = self.get_course_session(course_session_id).await?;
        let course = self.get_course(&course_session.course_id).await?;
        let students = self
            .list_students(
                &course.department_id,
                &course_session.session,
                course.year,
                course.semester,
            )
            .await?;

        let mut created = Vec::with_capacity(students.len());
        let mut skipped = 0u32;
        for student in &students {
            if self
                .find_enrollment(&student.id, course_session_id)
                .await?
                .is_some()
            {
                skipped += 1;
                continue;
            }
            match self.create_enrollment(&student.id, course_session_id).await {
                Ok(enrollment) => created.push(enrollment),
                Err(DatabaseError::Enrollment(EnrollmentError::DuplicateEnrollment { .. })) => {
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            course_session_id,
            course_code = %course.code,
            created = created.len(),
            skipped,
            "roster created"
        );
        Ok(RosterResponse {
            course_session,
            created,
            skipped,
        })
    }

    /// Enrollments of an offering, for its teacher or an administrator.
    ///
    /// # Errors
    ///
    /// `UnauthorizedRosterAccess` for any other actor.
    pub async fn session_roster(
        &self,
        actor: &User,
        course_session_id: &str,
    ) -> Result<Vec<Enrollment>, DatabaseError> {
        let course_session = self.get_course_session(course_session_id).await?;
        if !can_manage_session(actor, &course_session) {
            return Err(EnrollmentError::UnauthorizedRosterAccess {
                user_id: actor.id.clone(),
                course_session_id: course_session_id.to_string(),
            }
            .into());
        }
        self.list_session_enrollments(course_session_id).await
    }
}

//! Enrollment repository: creation, lookup, attempt history and mark writes.

use chrono::{DateTime, Utc};

use reg_core::entities::{Enrollment, EnrollmentAttempt, Marks};
use reg_core::errors::EnrollmentError;
use reg_core::ids::PREFIX_ENROLLMENT;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, is_unique_violation, parse_datetime};
use crate::service::RegService;

const SELECT_COLS: &str = "id, course_session_id, student_id, is_enrolled, class_assessment_marks, final_term_marks, created_at, updated_at";

const ATTEMPT_COLS: &str = "e.id, e.course_session_id, cs.course_id, cs.session, e.class_assessment_marks, e.final_term_marks, e.created_at";

fn row_to_enrollment(row: &libsql::Row) -> Result<Enrollment, DatabaseError> {
    Ok(Enrollment {
        id: row.get(0)?,
        course_session_id: row.get(1)?,
        student_id: row.get(2)?,
        is_enrolled: get_bool(row, 3)?,
        class_assessment_marks: row.get(4)?,
        final_term_marks: row.get(5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

fn row_to_attempt(row: &libsql::Row) -> Result<EnrollmentAttempt, DatabaseError> {
    Ok(EnrollmentAttempt {
        enrollment_id: row.get(0)?,
        course_session_id: row.get(1)?,
        course_id: row.get(2)?,
        session: row.get(3)?,
        class_assessment_marks: row.get(4)?,
        final_term_marks: row.get(5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

/// Write both mark components of one enrollment. Returns the affected row count.
///
/// Takes a bare connection so batch updates can run it inside a transaction.
pub(crate) async fn write_marks(
    conn: &libsql::Connection,
    enrollment_id: &str,
    marks: Marks,
    now: DateTime<Utc>,
) -> Result<u64, DatabaseError> {
    let changed = conn
        .execute(
            "UPDATE enrollments SET class_assessment_marks = ?1, final_term_marks = ?2, updated_at = ?3
             WHERE id = ?4",
            libsql::params![
                marks.class_assessment_marks,
                marks.final_term_marks,
                now.to_rfc3339(),
                enrollment_id
            ],
        )
        .await?;
    Ok(changed)
}

impl RegService {
    /// Insert a fresh enrollment: zero marks, not finalized.
    ///
    /// # Errors
    ///
    /// `DuplicateEnrollment` when the (student, course session) pair exists.
    pub async fn create_enrollment(
        &self,
        student_id: &str,
        course_session_id: &str,
    ) -> Result<Enrollment, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_ENROLLMENT).await?;

        let inserted = self
            .db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO enrollments ({SELECT_COLS}) VALUES (?1, ?2, ?3, 0, 0, 0, ?4, ?5)"
                ),
                libsql::params![
                    id.as_str(),
                    course_session_id,
                    student_id,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await;

        match inserted {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                tracing::warn!(
                    student_id,
                    course_session_id,
                    "enrollment rejected by unique constraint"
                );
                return Err(EnrollmentError::DuplicateEnrollment {
                    student_id: student_id.to_string(),
                    course_session_id: course_session_id.to_string(),
                }
                .into());
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Enrollment {
            id,
            course_session_id: course_session_id.to_string(),
            student_id: student_id.to_string(),
            is_enrolled: false,
            class_assessment_marks: 0,
            final_term_marks: 0,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_enrollment(&self, id: &str) -> Result<Enrollment, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM enrollments WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_enrollment(&row)
    }

    pub async fn find_enrollment(
        &self,
        student_id: &str,
        course_session_id: &str,
    ) -> Result<Option<Enrollment>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM enrollments WHERE student_id = ?1 AND course_session_id = ?2"
                ),
                libsql::params![student_id, course_session_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_enrollment(&row)?)),
            None => Ok(None),
        }
    }

    /// A student's attempts at one course across all its offerings, latest
    /// session first.
    pub async fn list_attempts(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> Result<Vec<EnrollmentAttempt>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {ATTEMPT_COLS} FROM enrollments e
                     JOIN course_sessions cs ON cs.id = e.course_session_id
                     WHERE e.student_id = ?1 AND cs.course_id = ?2
                     ORDER BY cs.session DESC, e.created_at DESC"
                ),
                libsql::params![student_id, course_id],
            )
            .await?;

        let mut attempts = Vec::new();
        while let Some(row) = rows.next().await? {
            attempts.push(row_to_attempt(&row)?);
        }
        Ok(attempts)
    }

    /// Every attempt a student has made at any course.
    pub async fn list_student_attempts(
        &self,
        student_id: &str,
    ) -> Result<Vec<EnrollmentAttempt>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {ATTEMPT_COLS} FROM enrollments e
                     JOIN course_sessions cs ON cs.id = e.course_session_id
                     WHERE e.student_id = ?1
                     ORDER BY cs.session DESC, e.created_at DESC"
                ),
                [student_id],
            )
            .await?;

        let mut attempts = Vec::new();
        while let Some(row) = rows.next().await? {
            attempts.push(row_to_attempt(&row)?);
        }
        Ok(attempts)
    }

    /// Enrollments of one course session in creation order.
    pub async fn list_session_enrollments(
        &self,
        course_session_id: &str,
    ) -> Result<Vec<Enrollment>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM enrollments WHERE course_session_id = ?1
                     ORDER BY created_at, id"
                ),
                [course_session_id],
            )
            .await?;

        let mut enrollments = Vec::new();
        while let Some(row) = rows.next().await? {
            enrollments.push(row_to_enrollment(&row)?);
        }
        Ok(enrollments)
    }

    /// Flip the finalized flag of an enrollment.
    ///
    /// # Errors
    ///
    /// `EnrollmentNotFound` when no enrollment has this id.
    pub async fn set_finalized(
        &self,
        enrollment_id: &str,
        finalized: bool,
    ) -> Result<Enrollment, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE enrollments SET is_enrolled = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![i64::from(finalized), Utc::now().to_rfc3339(), enrollment_id],
            )
            .await?;
        if changed == 0 {
            return Err(EnrollmentError::EnrollmentNotFound {
                id: enrollment_id.to_string(),
            }
            .into());
        }
        tracing::info!(enrollment_id, finalized, "enrollment finalized flag set");
        self.get_enrollment(enrollment_id).await
    }
}

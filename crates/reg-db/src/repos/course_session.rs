//! Course session (offering) repository.

use chrono::Utc;

use reg_core::entities::CourseSession;
use reg_core::ids::PREFIX_COURSE_SESSION;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::inputs::NewCourseSession;
use crate::service::RegService;

const SELECT_COLS: &str = "id, course_id, teacher_id, session, created_at";

fn row_to_course_session(row: &libsql::Row) -> Result<CourseSession, DatabaseError> {
    Ok(CourseSession {
        id: row.get(0)?,
        course_id: row.get(1)?,
        teacher_id: get_opt_string(row, 2)?,
        session: row.get(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl RegService {
    pub async fn create_course_session(
        &self,
        input: &NewCourseSession,
    ) -> Result<CourseSession, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_COURSE_SESSION).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO course_sessions ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5)"),
                libsql::params![
                    id.as_str(),
                    input.course_id.as_str(),
                    input.teacher_id.as_deref(),
                    input.session.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(CourseSession {
            id,
            course_id: input.course_id.clone(),
            teacher_id: input.teacher_id.clone(),
            session: input.session.clone(),
            created_at: now,
        })
    }

    pub async fn get_course_session(&self, id: &str) -> Result<CourseSession, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM course_sessions WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_course_session(&row)
    }

    /// The offering of a course with the greatest session label.
    pub async fn latest_course_session(
        &self,
        course_id: &str,
    ) -> Result<Option<CourseSession>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM course_sessions WHERE course_id = ?1
                     ORDER BY session DESC, created_at DESC LIMIT 1"
                ),
                [course_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_course_session(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_course_sessions(
        &self,
        course_id: &str,
    ) -> Result<Vec<CourseSession>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM course_sessions WHERE course_id = ?1 ORDER BY session DESC"
                ),
                [course_id],
            )
            .await?;

        let mut sessions = Vec::new();
        while let Some(row) = rows.next().await? {
            sessions.push(row_to_course_session(&row)?);
        }
        Ok(sessions)
    }

    /// Assign (or clear) the teacher owning an offering.
    pub async fn assign_teacher(
        &self,
        course_session_id: &str,
        teacher_id: Option<&str>,
    ) -> Result<CourseSession, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE course_sessions SET teacher_id = ?1 WHERE id = ?2",
                libsql::params![teacher_id, course_session_id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(course_session_id, teacher_id, "offering teacher assigned");
        self.get_course_session(course_session_id).await
    }
}

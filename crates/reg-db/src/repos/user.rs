//! User repository, including the student directory used by roster creation.

use chrono::Utc;

use reg_core::entities::{Student, User};
use reg_core::enums::Role;
use reg_core::ids::PREFIX_USER;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, get_opt_u32, parse_datetime, parse_enum};
use crate::inputs::NewUser;
use crate::service::RegService;

const SELECT_COLS: &str = "id, name, role, department_id, session, year, semester, created_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        role: parse_enum(&row.get::<String>(2)?)?,
        department_id: get_opt_string(row, 3)?,
        session: get_opt_string(row, 4)?,
        year: get_opt_u32(row, 5)?,
        semester: get_opt_u32(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl RegService {
    pub async fn create_user(&self, input: &NewUser) -> Result<User, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_USER).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO users ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
                ),
                libsql::params![
                    id.as_str(),
                    input.name.as_str(),
                    input.role.as_str(),
                    input.department_id.as_deref(),
                    input.session.as_deref(),
                    input.year.map(i64::from),
                    input.semester.map(i64::from),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(User {
            id,
            name: input.name.clone(),
            role: input.role,
            department_id: input.department_id.clone(),
            session: input.session.clone(),
            year: input.year,
            semester: input.semester,
            created_at: now,
        })
    }

    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    /// Load a user and narrow it to its academic profile.
    ///
    /// # Errors
    ///
    /// `NotAStudent` / `IncompleteStudentProfile` (as `DatabaseError::Enrollment`)
    /// when the account cannot act as a student.
    pub async fn get_student(&self, id: &str) -> Result<Student, DatabaseError> {
        Ok(self.get_user(id).await?.as_student()?)
    }

    pub async fn list_users(
        &self,
        role: Option<Role>,
        limit: u32,
    ) -> Result<Vec<User>, DatabaseError> {
        let mut rows = match role {
            Some(role) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM users WHERE role = ?1 ORDER BY name LIMIT ?2"
                        ),
                        libsql::params![role.as_str(), i64::from(limit)],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!("SELECT {SELECT_COLS} FROM users ORDER BY name LIMIT ?1"),
                        [i64::from(limit)],
                    )
                    .await?
            }
        };

        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }

    /// Students of one department cohort at a given year and semester.
    pub async fn list_students(
        &self,
        department_id: &str,
        session: &str,
        year: u32,
        semester: u32,
    ) -> Result<Vec<Student>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM users
                     WHERE role = 'student' AND department_id = ?1 AND session = ?2
                       AND year = ?3 AND semester = ?4
                     ORDER BY created_at, id"
                ),
                libsql::params![
                    department_id,
                    session,
                    i64::from(year),
                    i64::from(semester)
                ],
            )
            .await?;

        let mut students = Vec::new();
        while let Some(row) = rows.next().await? {
            students.push(row_to_user(&row)?.as_student()?);
        }
        Ok(students)
    }
}

//! Course catalog repository.

use chrono::Utc;

use reg_core::entities::Course;
use reg_core::ids::PREFIX_COURSE;

use crate::error::DatabaseError;
use crate::helpers::{get_u32, parse_datetime};
use crate::inputs::NewCourse;
use crate::service::RegService;

const SELECT_COLS: &str = "id, code, name, department_id, year, semester, credit, created_at";

fn row_to_course(row: &libsql::Row) -> Result<Course, DatabaseError> {
    Ok(Course {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        department_id: row.get(3)?,
        year: get_u32(row, 4)?,
        semester: get_u32(row, 5)?,
        credit: row.get(6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl RegService {
    pub async fn create_course(&self, input: &NewCourse) -> Result<Course, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_COURSE).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO courses ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
                ),
                libsql::params![
                    id.as_str(),
                    input.code.as_str(),
                    input.name.as_str(),
                    input.department_id.as_str(),
                    i64::from(input.year),
                    i64::from(input.semester),
                    input.credit,
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Course {
            id,
            code: input.code.clone(),
            name: input.name.clone(),
            department_id: input.department_id.clone(),
            year: input.year,
            semester: input.semester,
            credit: input.credit,
            created_at: now,
        })
    }

    pub async fn get_course(&self, id: &str) -> Result<Course, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM courses WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_course(&row)
    }

    pub async fn get_course_by_code(&self, code: &str) -> Result<Course, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM courses WHERE code = ?1"),
                [code],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_course(&row)
    }

    /// Every catalog course taught in the given year and semester, across
    /// all departments.
    pub async fn list_courses_by_year_semester(
        &self,
        year: u32,
        semester: u32,
    ) -> Result<Vec<Course>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM courses WHERE year = ?1 AND semester = ?2 ORDER BY code"
                ),
                libsql::params![i64::from(year), i64::from(semester)],
            )
            .await?;

        let mut courses = Vec::new();
        while let Some(row) = rows.next().await? {
            courses.push(row_to_course(&row)?);
        }
        Ok(courses)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DatabaseError;
    use crate::test_support::helpers::{seed_course, seed_department, test_service};

    #[tokio::test]
    async fn create_course_roundtrip() {
        let svc = test_service().await;
        let dept = seed_department(&svc, "CSE").await;
        let course = seed_course(&svc, &dept, "CSE-201", 2, 1, 3.0).await;
        assert!(course.id.starts_with("crs-"));

        let fetched = svc.get_course(&course.id).await.unwrap();
        assert_eq!(fetched.code, "CSE-201");
        assert_eq!(fetched.year, 2);
        assert!((fetched.credit - 3.0).abs() < f64::EPSILON);

        let by_code = svc.get_course_by_code("CSE-201").await.unwrap();
        assert_eq!(by_code.id, course.id);
    }

    #[tokio::test]
    async fn course_code_unique() {
        let svc = test_service().await;
        let dept = seed_department(&svc, "CSE").await;
        seed_course(&svc, &dept, "CSE-201", 2, 1, 3.0).await;

        let dup = crate::inputs::NewCourse {
            code: "CSE-201".into(),
            name: "Again".into(),
            department_id: dept.id.clone(),
            year: 2,
            semester: 1,
            credit: 3.0,
        };
        assert!(svc.create_course(&dup).await.is_err());
    }

    #[tokio::test]
    async fn list_by_year_semester_spans_departments() {
        let svc = test_service().await;
        let cse = seed_department(&svc, "CSE").await;
        let eee = seed_department(&svc, "EEE").await;
        seed_course(&svc, &cse, "CSE-201", 2, 1, 3.0).await;
        seed_course(&svc, &eee, "EEE-201", 2, 1, 4.0).await;
        seed_course(&svc, &cse, "CSE-202", 2, 2, 3.0).await;

        let codes: Vec<_> = svc
            .list_courses_by_year_semester(2, 1)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.code)
            .collect();
        assert_eq!(codes, ["CSE-201", "EEE-201"]);
    }

    #[tokio::test]
    async fn missing_course_is_no_result() {
        let svc = test_service().await;
        assert!(matches!(
            svc.get_course("crs-missing").await,
            Err(DatabaseError::NoResult)
        ));
    }
}

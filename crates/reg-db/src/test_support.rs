//! Shared test utilities for reg-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use reg_core::entities::{Course, CourseSession, Department, Enrollment, Marks, Student, User};
    use reg_core::enums::Role;

    use crate::RegDb;
    use crate::inputs::{NewCourse, NewCourseSession, NewUser};
    use crate::repos::enrollment::write_marks;
    use crate::service::RegService;

    /// Create an in-memory `RegService`.
    pub async fn test_service() -> RegService {
        let db = RegDb::open_local(":memory:").await.unwrap();
        RegService::from_db(db)
    }

    pub async fn seed_department(svc: &RegService, name: &str) -> Department {
        svc.create_department(name).await.unwrap()
    }

    /// A complete student profile in the given cohort.
    pub async fn seed_student(
        svc: &RegService,
        department: &Department,
        session: &str,
        year: u32,
        semester: u32,
    ) -> Student {
        let user = svc
            .create_user(&NewUser {
                name: format!("Student {session}/{year}/{semester}"),
                role: Role::Student,
                department_id: Some(department.id.clone()),
                session: Some(session.to_string()),
                year: Some(year),
                semester: Some(semester),
            })
            .await
            .unwrap();
        user.as_student().unwrap()
    }

    pub async fn seed_user(svc: &RegService, name: &str, role: Role) -> User {
        svc.create_user(&NewUser {
            name: name.to_string(),
            role,
            department_id: None,
            session: None,
            year: None,
            semester: None,
        })
        .await
        .unwrap()
    }

    pub async fn seed_teacher(svc: &RegService, name: &str) -> User {
        seed_user(svc, name, Role::Teacher).await
    }

    pub async fn seed_course(
        svc: &RegService,
        department: &Department,
        code: &str,
        year: u32,
        semester: u32,
        credit: f64,
    ) -> Course {
        svc.create_course(&NewCourse {
            code: code.to_string(),
            name: format!("{code} course"),
            department_id: department.id.clone(),
            year,
            semester,
            credit,
        })
        .await
        .unwrap()
    }

    pub async fn seed_offering(
        svc: &RegService,
        course: &Course,
        session: &str,
        teacher: Option<&User>,
    ) -> CourseSession {
        svc.create_course_session(&NewCourseSession {
            course_id: course.id.clone(),
            session: session.to_string(),
            teacher_id: teacher.map(|t| t.id.clone()),
        })
        .await
        .unwrap()
    }

    /// An enrollment with marks already posted, bypassing authorization.
    pub async fn seed_attempt(
        svc: &RegService,
        student: &Student,
        offering: &CourseSession,
        class_assessment_marks: i64,
        final_term_marks: i64,
    ) -> Enrollment {
        let enrollment = svc
            .create_enrollment(&student.id, &offering.id)
            .await
            .unwrap();
        let marks = Marks {
            class_assessment_marks,
            final_term_marks,
        };
        write_marks(svc.db().conn(), &enrollment.id, marks, chrono::Utc::now())
            .await
            .unwrap();
        svc.get_enrollment(&enrollment.id).await.unwrap()
    }
}

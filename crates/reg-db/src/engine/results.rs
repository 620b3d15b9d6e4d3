//! Best-attempt results and semester reports.

use reg_core::errors::EnrollmentError;
use reg_core::results::{self, BestResult, SemesterReport};

use crate::error::DatabaseError;
use crate::service::RegService;

impl RegService {
    /// The graded best attempt of a student at one course.
    ///
    /// # Errors
    ///
    /// `NoEnrollmentData` when the student never enrolled in the course.
    pub async fn best_result_for_course(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> Result<BestResult, DatabaseError> {
        let attempts = self.list_attempts(student_id, course_id).await?;
        let best = results::best_attempt(&attempts).ok_or_else(|| {
            EnrollmentError::NoEnrollmentData {
                student_id: student_id.to_string(),
                course_id: course_id.to_string(),
            }
        })?;
        tracing::debug!(
            student_id,
            course_id,
            attempts = attempts.len(),
            enrollment_id = %best.enrollment_id,
            "best attempt selected"
        );
        Ok(results::best_result(best)?)
    }

    /// Per-course results and CGPA for one year and semester of the catalog.
    ///
    /// Covers every catalog course of the term; courses the student never
    /// attempted are reported as not enrolled.
    pub async fn semester_report(
        &self,
        student_id: &str,
        year: u32,
        semester: u32,
    ) -> Result<SemesterReport, DatabaseError> {
        let student = self.get_student(student_id).await?;
        let courses = self.list_courses_by_year_semester(year, semester).await?;
        let attempts = self.list_student_attempts(&student.id).await?;
        let report = results::semester_report(&student.id, year, semester, &courses, &attempts)?;
        tracing::debug!(
            student_id,
            year,
            semester,
            courses = report.courses.len(),
            cgpa = report.cgpa,
            "semester report built"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use reg_core::enums::LetterGrade;
    use reg_core::errors::EnrollmentError;
    use reg_core::results::NOT_ENROLLED_REMARK;

    use crate::error::DatabaseError;
    use crate::test_support::helpers::{
        seed_attempt, seed_course, seed_department, seed_offering, seed_student, test_service,
    };

    #[tokio::test]
    async fn best_attempt_independent_of_insertion_order() {
        let svc = test_service().await;
        let dept = seed_department(&svc, "CSE").await;
        let student = seed_student(&svc, &dept, "2022", 2, 1).await;
        let course = seed_course(&svc, &dept, "CSE-201", 2, 1, 3.0).await;
        let later = seed_offering(&svc, &course, "2023", None).await;
        let earlier = seed_offering(&svc, &course, "2022", None).await;

        let best = seed_attempt(&svc, &student, &later, 25, 40).await;
        seed_attempt(&svc, &student, &earlier, 20, 30).await;

        let result = svc
            .best_result_for_course(&student.id, &course.id)
            .await
            .unwrap();
        assert_eq!(result.enrollment_id, best.id);
        assert_eq!(result.total_marks, 65);
        assert_eq!(result.grade, LetterGrade::BPlus);
        assert_eq!(result.remark, "Good");
    }

    #[tokio::test]
    async fn best_result_without_enrollment_is_error() {
        let svc = test_service().await;
        let dept = seed_department(&svc, "CSE").await;
        let student = seed_student(&svc, &dept, "2022", 2, 1).await;
        let course = seed_course(&svc, &dept, "CSE-201", 2, 1, 3.0).await;

        let err = svc
            .best_result_for_course(&student.id, &course.id)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Enrollment(EnrollmentError::NoEnrollmentData { .. })
        ));
    }

    #[tokio::test]
    async fn semester_report_weights_by_credit() {
        let svc = test_service().await;
        let dept = seed_department(&svc, "CSE").await;
        let student = seed_student(&svc, &dept, "2023", 1, 1).await;
        let three = seed_course(&svc, &dept, "CSE-101", 1, 1, 3.0).await;
        let four = seed_course(&svc, &dept, "CSE-103", 1, 1, 4.0).await;
        let o3 = seed_offering(&svc, &three, "2023", None).await;
        let o4 = seed_offering(&svc, &four, "2023", None).await;
        seed_attempt(&svc, &student, &o3, 20, 50).await;
        seed_attempt(&svc, &student, &o4, 25, 55).await;

        let report = svc.semester_report(&student.id, 1, 1).await.unwrap();
        assert_eq!(report.courses.len(), 2);
        assert!((report.cgpa - 3.79).abs() < 1e-9);
        assert!((report.total_credit_hours - 7.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn semester_report_counts_not_enrolled_courses() {
        let svc = test_service().await;
        let dept = seed_department(&svc, "CSE").await;
        let student = seed_student(&svc, &dept, "2023", 1, 1).await;
        let three = seed_course(&svc, &dept, "CSE-101", 1, 1, 3.0).await;
        let four = seed_course(&svc, &dept, "CSE-103", 1, 1, 4.0).await;
        seed_course(&svc, &dept, "CSE-105", 1, 1, 2.0).await;
        seed_course(&svc, &dept, "CSE-201", 2, 1, 3.0).await;
        let o3 = seed_offering(&svc, &three, "2023", None).await;
        let o4 = seed_offering(&svc, &four, "2023", None).await;
        seed_attempt(&svc, &student, &o3, 20, 50).await;
        seed_attempt(&svc, &student, &o4, 25, 55).await;

        let report = svc.semester_report(&student.id, 1, 1).await.unwrap();
        assert_eq!(report.courses.len(), 3);
        assert!((report.cgpa - 2.94).abs() < 1e-9);

        let missing = report
            .courses
            .iter()
            .find(|row| row.course_code == "CSE-105")
            .unwrap();
        assert_eq!(missing.total_marks, None);
        assert_eq!(missing.grade, LetterGrade::F);
        assert_eq!(missing.remark, NOT_ENROLLED_REMARK);
    }

    #[tokio::test]
    async fn semester_report_empty_term_has_zero_cgpa() {
        let svc = test_service().await;
        let dept = seed_department(&svc, "CSE").await;
        let student = seed_student(&svc, &dept, "2023", 1, 1).await;

        let report = svc.semester_report(&student.id, 4, 2).await.unwrap();
        assert!(report.courses.is_empty());
        assert!(report.cgpa.abs() < f64::EPSILON);
    }
}

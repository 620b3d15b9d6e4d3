//! Mark entry by teachers and administrators.

use chrono::Utc;

use reg_core::entities::{Enrollment, Marks, User};
use reg_core::errors::EnrollmentError;
use reg_core::policy::can_manage_session;
use reg_core::responses::MarksUpdateResponse;

use crate::error::DatabaseError;
use crate::inputs::MarksEntry;
use crate::repos::enrollment::write_marks;
use crate::service::RegService;

impl RegService {
    /// Load an enrollment, reporting a missing row as `EnrollmentNotFound`.
    async fn enrollment_or_not_found(&self, id: &str) -> Result<Enrollment, DatabaseError> {
        match self.get_enrollment(id).await {
            Err(DatabaseError::NoResult) => Err(EnrollmentError::EnrollmentNotFound {
                id: id.to_string(),
            }
            .into()),
            other => other,
        }
    }

    /// Post marks for one enrollment.
    ///
    /// # Errors
    ///
    /// - `InvalidMarks` when a component is out of range.
    /// - `EnrollmentNotFound` for an unknown enrollment.
    /// - `UnauthorizedMarkUpdate` unless `actor` owns the course session or is
    ///   an administrator.
    pub async fn update_marks(
        &self,
        actor: &User,
        enrollment_id: &str,
        marks: Marks,
    ) -> Result<Enrollment, DatabaseError> {
        marks.validate()?;
        let enrollment = self.enrollment_or_not_found(enrollment_id).await?;
        let course_session = self
            .get_course_session(&enrollment.course_session_id)
            .await?;
        if !can_manage_session(actor, &course_session) {
            return Err(EnrollmentError::UnauthorizedMarkUpdate {
                user_id: actor.id.clone(),
                target: enrollment_id.to_string(),
            }
            .into());
        }

        write_marks(self.db().conn(), enrollment_id, marks, Utc::now()).await?;
        tracing::info!(
            enrollment_id,
            actor = %actor.id,
            class_assessment_marks = marks.class_assessment_marks,
            final_term_marks = marks.final_term_marks,
            "marks updated"
        );
        self.get_enrollment(enrollment_id).await
    }

    /// Post marks for many enrollments of one course session at once.
    ///
    /// Every entry is checked before anything is written, and the writes
    /// share one transaction: either all entries are stored or none.
    pub async fn update_marks_bulk(
        &self,
        actor: &User,
        course_session_id: &str,
        entries: &[MarksEntry],
    ) -> Result<MarksUpdateResponse, DatabaseError> {
        let course_session = self.get_course_session(course_session_id).await?;
        if !can_manage_session(actor, &course_session) {
            return Err(EnrollmentError::UnauthorizedMarkUpdate {
                user_id: actor.id.clone(),
                target: course_session_id.to_string(),
            }
            .into());
        }
        if entries.is_empty() {
            return Ok(MarksUpdateResponse {
                updated: Vec::new(),
            });
        }

        for entry in entries {
            entry.marks.validate()?;
            let enrollment = self.enrollment_or_not_found(&entry.enrollment_id).await?;
            if enrollment.course_session_id != course_session_id {
                return Err(EnrollmentError::EnrollmentOutsideSession {
                    enrollment_id: entry.enrollment_id.clone(),
                    course_session_id: course_session_id.to_string(),
                }
                .into());
            }
        }

        let now = Utc::now();
        let tx = self.db().conn().transaction().await?;
        for entry in entries {
            if let Err(e) = write_marks(&tx, &entry.enrollment_id, entry.marks, now).await {
                tx.rollback().await?;
                return Err(e);
            }
        }
        tx.commit().await?;

        tracing::info!(
            course_session_id,
            actor = %actor.id,
            count = entries.len(),
            "marks updated in bulk"
        );

        let mut updated = Vec::with_capacity(entries.len());
        for entry in entries {
            updated.push(self.get_enrollment(&entry.enrollment_id).await?);
        }
        Ok(MarksUpdateResponse { updated })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use reg_core::entities::Marks;
    use reg_core::enums::Role;
    use reg_core::errors::EnrollmentError;

    use crate::error::DatabaseError;
    use crate::inputs::MarksEntry;
    use crate::test_support::helpers::{
        seed_course, seed_department, seed_offering, seed_student, seed_teacher, seed_user,
        test_service,
    };

    const fn marks(ca: i64, ft: i64) -> Marks {
        Marks {
            class_assessment_marks: ca,
            final_term_marks: ft,
        }
    }

    #[tokio::test]
    async fn owning_teacher_updates_marks() {
        let svc = test_service().await;
        let dept = seed_department(&svc, "CSE").await;
        let teacher = seed_teacher(&svc, "Dr. Karim").await;
        let student = seed_student(&svc, &dept, "2023", 2, 1).await;
        let course = seed_course(&svc, &dept, "CSE-201", 2, 1, 3.0).await;
        let offering = seed_offering(&svc, &course, "2023", Some(&teacher)).await;
        let enrollment = svc
            .create_enrollment(&student.id, &offering.id)
            .await
            .unwrap();

        let updated = svc
            .update_marks(&teacher, &enrollment.id, marks(25, 50))
            .await
            .unwrap();
        assert_eq!(updated.total_marks(), 75);
    }

    #[tokio::test]
    async fn other_teacher_and_student_rejected_admin_allowed() {
        let svc = test_service().await;
        let dept = seed_department(&svc, "CSE").await;
        let owner = seed_teacher(&svc, "Dr. Karim").await;
        let stranger = seed_teacher(&svc, "Dr. Hossain").await;
        let admin = seed_user(&svc, "Registrar", Role::SuperAdmin).await;
        let student = seed_student(&svc, &dept, "2023", 2, 1).await;
        let student_user = svc.get_user(&student.id).await.unwrap();
        let course = seed_course(&svc, &dept, "CSE-201", 2, 1, 3.0).await;
        let offering = seed_offering(&svc, &course, "2023", Some(&owner)).await;
        let enrollment = svc
            .create_enrollment(&student.id, &offering.id)
            .await
            .unwrap();

        for actor in [&stranger, &student_user] {
            let err = svc
                .update_marks(actor, &enrollment.id, marks(30, 70))
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                DatabaseError::Enrollment(EnrollmentError::UnauthorizedMarkUpdate { .. })
            ));
        }

        let updated = svc
            .update_marks(&admin, &enrollment.id, marks(30, 70))
            .await
            .unwrap();
        assert_eq!(updated.total_marks(), 100);
    }

    #[tokio::test]
    async fn out_of_range_marks_rejected() {
        let svc = test_service().await;
        let admin = seed_user(&svc, "Registrar", Role::Admin).await;

        let err = svc
            .update_marks(&admin, "enr-anything", marks(31, 0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Enrollment(EnrollmentError::InvalidMarks {
                field: "class_assessment_marks",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn unknown_enrollment_not_found() {
        let svc = test_service().await;
        let admin = seed_user(&svc, "Registrar", Role::Admin).await;
        let err = svc
            .update_marks(&admin, "enr-missing", marks(10, 10))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Enrollment(EnrollmentError::EnrollmentNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn bulk_update_is_all_or_nothing() {
        let svc = test_service().await;
        let dept = seed_department(&svc, "CSE").await;
        let teacher = seed_teacher(&svc, "Dr. Karim").await;
        let course = seed_course(&svc, &dept, "CSE-201", 2, 1, 3.0).await;
        let offering = seed_offering(&svc, &course, "2023", Some(&teacher)).await;
        let other = seed_offering(&svc, &course, "2022", Some(&teacher)).await;
        let a = seed_student(&svc, &dept, "2023", 2, 1).await;
        let b = seed_student(&svc, &dept, "2023", 2, 1).await;
        let ea = svc.create_enrollment(&a.id, &offering.id).await.unwrap();
        let eb = svc.create_enrollment(&b.id, &other.id).await.unwrap();

        let entries = vec![
            MarksEntry {
                enrollment_id: ea.id.clone(),
                marks: marks(20, 40),
            },
            MarksEntry {
                enrollment_id: eb.id.clone(),
                marks: marks(20, 40),
            },
        ];
        let err = svc
            .update_marks_bulk(&teacher, &offering.id, &entries)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Enrollment(EnrollmentError::EnrollmentOutsideSession { .. })
        ));
        assert_eq!(svc.get_enrollment(&ea.id).await.unwrap().total_marks(), 0);

        let response = svc
            .update_marks_bulk(&teacher, &offering.id, &entries[..1])
            .await
            .unwrap();
        assert_eq!(response.updated.len(), 1);
        assert_eq!(response.updated[0].total_marks(), 60);
    }

    #[tokio::test]
    async fn bulk_update_rejects_invalid_entry_before_writing() {
        let svc = test_service().await;
        let dept = seed_department(&svc, "CSE").await;
        let teacher = seed_teacher(&svc, "Dr. Karim").await;
        let course = seed_course(&svc, &dept, "CSE-201", 2, 1, 3.0).await;
        let offering = seed_offering(&svc, &course, "2023", Some(&teacher)).await;
        let a = seed_student(&svc, &dept, "2023", 2, 1).await;
        let b = seed_student(&svc, &dept, "2023", 2, 1).await;
        let ea = svc.create_enrollment(&a.id, &offering.id).await.unwrap();
        let eb = svc.create_enrollment(&b.id, &offering.id).await.unwrap();

        let entries = vec![
            MarksEntry {
                enrollment_id: ea.id.clone(),
                marks: marks(20, 40),
            },
            MarksEntry {
                enrollment_id: eb.id.clone(),
                marks: marks(20, 71),
            },
        ];
        let err = svc
            .update_marks_bulk(&teacher, &offering.id, &entries)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Enrollment(EnrollmentError::InvalidMarks { .. })
        ));
        assert_eq!(svc.get_enrollment(&ea.id).await.unwrap().total_marks(), 0);
    }

    #[tokio::test]
    async fn bulk_update_requires_ownership() {
        let svc = test_service().await;
        let dept = seed_department(&svc, "CSE").await;
        let owner = seed_teacher(&svc, "Dr. Karim").await;
        let stranger = seed_teacher(&svc, "Dr. Hossain").await;
        let course = seed_course(&svc, &dept, "CSE-201", 2, 1, 3.0).await;
        let offering = seed_offering(&svc, &course, "2023", Some(&owner)).await;
        let a = seed_student(&svc, &dept, "2023", 2, 1).await;
        let ea = svc.create_enrollment(&a.id, &offering.id).await.unwrap();

        let entries = [MarksEntry {
            enrollment_id: ea.id,
            marks: marks(10, 10),
        }];
        let err = svc
            .update_marks_bulk(&stranger, &offering.id, &entries)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Enrollment(EnrollmentError::UnauthorizedMarkUpdate { .. })
        ));
    }

    #[tokio::test]
    async fn empty_batch_still_checks_ownership() {
        let svc = test_service().await;
        let dept = seed_department(&svc, "CSE").await;
        let owner = seed_teacher(&svc, "Dr. Karim").await;
        let stranger = seed_teacher(&svc, "Dr. Hossain").await;
        let course = seed_course(&svc, &dept, "CSE-201", 2, 1, 3.0).await;
        let offering = seed_offering(&svc, &course, "2023", Some(&owner)).await;

        let err = svc
            .update_marks_bulk(&stranger, &offering.id, &[])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Enrollment(EnrollmentError::UnauthorizedMarkUpdate { .. })
        ));
        assert!(err.to_string().contains(&offering.id));

        let response = svc
            .update_marks_bulk(&owner, &offering.id, &[])
            .await
            .unwrap();
        assert!(response.updated.is_empty());
    }
}

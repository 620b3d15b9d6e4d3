use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::errors::EnrollmentError;

/// A user account. Academic fields are only meaningful for students.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub department_id: Option<String>,
    /// Cohort label the student was admitted with, e.g. `"2023"`.
    pub session: Option<String>,
    pub year: Option<u32>,
    pub semester: Option<u32>,
    pub created_at: DateTime<Utc>,
}

/// The academic view of a student, as read by the eligibility engine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub department_id: String,
    pub session: String,
    pub year: u32,
    pub semester: u32,
}

impl User {
    /// Narrow this account to a [`Student`].
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError::NotAStudent` for any other role, and
    /// `EnrollmentError::IncompleteStudentProfile` when an academic field is
    /// missing.
    pub fn as_student(&self) -> Result<Student, EnrollmentError> {
        if self.role != Role::Student {
            return Err(EnrollmentError::NotAStudent {
                user_id: self.id.clone(),
            });
        }
        let missing = |field| EnrollmentError::IncompleteStudentProfile {
            user_id: self.id.clone(),
            field,
        };
        Ok(Student {
            id: self.id.clone(),
            department_id: self
                .department_id
                .clone()
                .ok_or_else(|| missing("department"))?,
            session: self.session.clone().ok_or_else(|| missing("session"))?,
            year: self.year.ok_or_else(|| missing("year"))?,
            semester: self.semester.ok_or_else(|| missing("semester"))?,
        })
    }
}

//! Catalog import: seed departments, users, courses and offerings from one
//! JSON document.
//!
//! References inside the document use natural keys: departments by name,
//! courses by code, users by a document-local `key`. Names and codes that
//! already exist in the store resolve to the stored rows, so a document may
//! extend an earlier import. The whole document is applied in one
//! transaction.

use std::collections::HashMap;

use reg_core::enums::Role;
use reg_core::responses::ImportResponse;
use serde::{Deserialize, Serialize};

use crate::error::DatabaseError;
use crate::inputs::{NewCourse, NewCourseSession, NewUser};
use crate::service::RegService;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogImport {
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub users: Vec<ImportUser>,
    #[serde(default)]
    pub courses: Vec<ImportCourse>,
    #[serde(default)]
    pub course_sessions: Vec<ImportCourseSession>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportUser {
    /// Document-local handle other entries use to refer to this user.
    pub key: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub semester: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportCourse {
    pub code: String,
    pub name: String,
    pub department: String,
    pub year: u32,
    pub semester: u32,
    pub credit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportCourseSession {
    /// Course code.
    pub course: String,
    pub session: String,
    /// User key from this document, or the id of a stored user.
    #[serde(default)]
    pub teacher: Option<String>,
    /// Enroll the matching student cohort right after creating the offering.
    #[serde(default)]
    pub enroll_cohort: bool,
}

impl CatalogImport {
    /// Parse an import document.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for malformed JSON.
    pub fn from_json(input: &str) -> Result<Self, DatabaseError> {
        serde_json::from_str(input)
            .map_err(|e| DatabaseError::InvalidState(format!("invalid import document: {e}")))
    }
}

impl RegService {
    /// Apply a catalog document. Nothing is stored if any entry fails.
    pub async fn import_catalog(
        &self,
        doc: &CatalogImport,
    ) -> Result<ImportResponse, DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        match self.apply_import(doc).await {
            Ok(response) => {
                tx.commit().await?;
                tracing::info!(
                    departments = response.departments,
                    users = response.users,
                    courses = response.courses,
                    course_sessions = response.course_sessions,
                    enrollments = response.enrollments,
                    "catalog imported"
                );
                Ok(response)
            }
            Err(e) => {
                tx.rollback().await?;
                Err(e)
            }
        }
    }

    async fn apply_import(&self, doc: &CatalogImport) -> Result<ImportResponse, DatabaseError> {
        let mut response = ImportResponse::default();

        let mut departments: HashMap<String, String> = self
            .list_departments()
            .await?
            .into_iter()
            .map(|d| (d.name, d.id))
            .collect();
        for name in &doc.departments {
            if departments.contains_key(name) {
                continue;
            }
            let dept = self.create_department(name).await?;
            departments.insert(dept.name, dept.id);
            response.departments += 1;
        }
        let department_id = |name: &str| {
            departments
                .get(name)
                .cloned()
                .ok_or_else(|| DatabaseError::InvalidState(format!("unknown department: {name}")))
        };

        let mut users: HashMap<&str, String> = HashMap::new();
        for user in &doc.users {
            let created = self
                .create_user(&NewUser {
                    name: user.name.clone(),
                    role: user.role,
                    department_id: user.department.as_deref().map(department_id).transpose()?,
                    session: user.session.clone(),
                    year: user.year,
                    semester: user.semester,
                })
                .await?;
            users.insert(user.key.as_str(), created.id);
            response.users += 1;
        }

        let mut courses: HashMap<String, String> = HashMap::new();
        for course in &doc.courses {
            let created = self
                .create_course(&NewCourse {
                    code: course.code.clone(),
                    name: course.name.clone(),
                    department_id: department_id(&course.department)?,
                    year: course.year,
                    semester: course.semester,
                    credit: course.credit,
                })
                .await?;
            courses.insert(created.code, created.id);
            response.courses += 1;
        }

        for offering in &doc.course_sessions {
            let course_id = match courses.get(&offering.course) {
                Some(id) => id.clone(),
                None => match self.get_course_by_code(&offering.course).await {
                    Ok(course) => course.id,
                    Err(DatabaseError::NoResult) => {
                        return Err(DatabaseError::InvalidState(format!(
                            "unknown course: {}",
                            offering.course
                        )));
                    }
                    Err(e) => return Err(e),
                },
            };
            let teacher_id = offering
                .teacher
                .as_deref()
                .map(|key| users.get(key).cloned().unwrap_or_else(|| key.to_string()));

            let created = self
                .create_course_session(&NewCourseSession {
                    course_id,
                    session: offering.session.clone(),
                    teacher_id,
                })
                .await?;
            response.course_sessions += 1;

            if offering.enroll_cohort {
                let roster = self.enroll_all_eligible_students(&created.id).await?;
                response.enrollments += u32::try_from(roster.created.len()).unwrap_or(u32::MAX);
            }
        }

        Ok(response)
    }
}

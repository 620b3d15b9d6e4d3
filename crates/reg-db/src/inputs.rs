//! Insert and update payloads.
//!
//! These are the shapes accepted by the `create_*` repository methods and by
//! `regr import` / `regr marks import` JSON documents.

use reg_core::entities::Marks;
use reg_core::enums::Role;
use serde::{Deserialize, Serialize};

/// A new user account. Academic fields are only required for students.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub semester: Option<u32>,
}

/// A new catalog course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCourse {
    pub code: String,
    pub name: String,
    pub department_id: String,
    pub year: u32,
    pub semester: u32,
    pub credit: f64,
}

/// A new offering of an existing course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCourseSession {
    pub course_id: String,
    pub session: String,
    #[serde(default)]
    pub teacher_id: Option<String>,
}

/// One entry of a bulk mark update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarksEntry {
    pub enrollment_id: String,
    #[serde(flatten)]
    pub marks: Marks,
}

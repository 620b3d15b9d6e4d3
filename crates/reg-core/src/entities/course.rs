use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A catalog course. Offered many times over through [`CourseSession`]s.
///
/// [`CourseSession`]: super::CourseSession
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Course {
    pub id: String,
    pub code: String,
    pub name: String,
    pub department_id: String,
    pub year: u32,
    pub semester: u32,
    /// Credit hours. Positive.
    pub credit: f64,
    pub created_at: DateTime<Utc>,
}

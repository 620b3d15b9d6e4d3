use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One offering of a course for a session label such as `"2023"`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseSession {
    pub id: String,
    pub course_id: String,
    /// Owning teacher; the only non-admin allowed to post marks.
    pub teacher_id: Option<String>,
    pub session: String,
    pub created_at: DateTime<Utc>,
}

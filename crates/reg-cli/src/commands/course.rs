use anyhow::ensure;
use serde::Serialize;

use reg_core::entities::{Course, CourseSession};
use reg_core::enums::Role;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CourseCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CourseListResponse {
    courses: Vec<Course>,
}

#[derive(Debug, Serialize)]
struct OfferingListResponse {
    course_sessions: Vec<CourseSession>,
}

/// Handle `regr course`.
pub async fn handle(
    action: &CourseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CourseCommands::List { year, semester } => {
            let courses = ctx
                .service
                .list_courses_by_year_semester(*year, *semester)
                .await?;
            output(&CourseListResponse { courses }, flags.format)
        }
        CourseCommands::Offerings { course } => {
            let course_sessions = ctx.service.list_course_sessions(course).await?;
            output(&OfferingListResponse { course_sessions }, flags.format)
        }
        CourseCommands::AssignTeacher { offering, teacher } => {
            if let Some(id) = teacher {
                let user = ctx.service.get_user(id).await?;
                ensure!(user.role == Role::Teacher, "user {id} is not a teacher");
            }
            let updated = ctx
                .service
                .assign_teacher(offering, teacher.as_deref())
                .await?;
            output(&updated, flags.format)
        }
    }
}

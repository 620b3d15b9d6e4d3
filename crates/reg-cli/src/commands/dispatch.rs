use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Import(args) => commands::import::handle(&args, ctx, flags).await,
        Commands::Eligibility(args) => commands::eligibility::handle(&args, ctx, flags).await,
        Commands::Enroll(args) => commands::enroll::handle(&args, ctx, flags).await,
        Commands::Roster { action } => commands::roster::handle(&action, ctx, flags).await,
        Commands::Marks { action } => commands::marks::handle(&action, ctx, flags).await,
        Commands::Result { action } => commands::result::handle(&action, ctx, flags).await,
        Commands::Overview(args) => commands::overview::handle(&args, ctx, flags).await,
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::Course { action } => commands::course::handle(&action, ctx, flags).await,
        Commands::Grade(args) => commands::grade::handle(&args, flags),
    }
}

#[cfg(test)]
mod tests {
    use reg_config::RegConfig;
    use reg_core::enums::Role;
    use tempfile::TempDir;

    use super::dispatch;
    use crate::cli::root_commands::{Commands, EnrollArgs, ImportArgs};
    use crate::cli::subcommands::{CourseCommands, ResultCommands};
    use crate::cli::{GlobalFlags, OutputFormat};
    use crate::context::AppContext;

    const DOC: &str = r#"{
        "departments": ["CSE"],
        "users": [
            {"key": "nadia", "name": "Nadia Rahman", "role": "student",
             "department": "CSE", "session": "2023", "year": 1, "semester": 1},
            {"key": "karim", "name": "Dr. Karim", "role": "teacher"}
        ],
        "courses": [
            {"code": "CSE-101", "name": "Structured Programming", "department": "CSE",
             "year": 1, "semester": 1, "credit": 3.0}
        ],
        "course_sessions": [{"course": "CSE-101", "session": "2023"}]
    }"#;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            limit: None,
            quiet: true,
            verbose: false,
            database: None,
        }
    }

    fn assign_teacher(offering: &str, teacher: Option<&str>) -> Commands {
        Commands::Course {
            action: CourseCommands::AssignTeacher {
                offering: offering.to_string(),
                teacher: teacher.map(str::to_string),
            },
        }
    }

    #[tokio::test]
    async fn import_enroll_and_report_through_dispatch() {
        let temp = TempDir::new().expect("tempdir should create");
        let file = temp.path().join("catalog.json");
        std::fs::write(&file, DOC).expect("doc should write");

        let ctx = AppContext::init(RegConfig::default(), Some(":memory:"))
            .await
            .expect("context should init");

        dispatch(Commands::Import(ImportArgs { file }), &ctx, &flags())
            .await
            .expect("import should succeed");

        let students = ctx
            .service
            .list_users(Some(Role::Student), 10)
            .await
            .expect("users should list");
        let student = students[0].id.clone();
        let course = ctx
            .service
            .get_course_by_code("CSE-101")
            .await
            .expect("course should exist");

        dispatch(
            Commands::Enroll(EnrollArgs {
                student: student.clone(),
                offering: None,
                course: Some(course.id.clone()),
            }),
            &ctx,
            &flags(),
        )
        .await
        .expect("enroll should succeed");

        dispatch(
            Commands::Result {
                action: ResultCommands::Semester {
                    student: student.clone(),
                    year: 1,
                    semester: 1,
                },
            },
            &ctx,
            &flags(),
        )
        .await
        .expect("report should succeed");

        let report = ctx
            .service
            .semester_report(&student, 1, 1)
            .await
            .expect("report should build");
        assert_eq!(report.courses.len(), 1);
        assert_eq!(report.courses[0].total_marks, Some(0));
    }

    #[tokio::test]
    async fn enrolling_twice_surfaces_error() {
        let temp = TempDir::new().expect("tempdir should create");
        let file = temp.path().join("catalog.json");
        std::fs::write(&file, DOC).expect("doc should write");
        let ctx = AppContext::init(RegConfig::default(), Some(":memory:"))
            .await
            .expect("context should init");
        dispatch(Commands::Import(ImportArgs { file }), &ctx, &flags())
            .await
            .expect("import should succeed");

        let student = ctx
            .service
            .list_users(Some(Role::Student), 10)
            .await
            .expect("users should list")[0]
            .id
            .clone();
        let course = ctx
            .service
            .get_course_by_code("CSE-101")
            .await
            .expect("course should exist");
        let args = EnrollArgs {
            student,
            offering: None,
            course: Some(course.id),
        };

        dispatch(Commands::Enroll(args.clone()), &ctx, &flags())
            .await
            .expect("first enroll should succeed");
        let err = dispatch(Commands::Enroll(args), &ctx, &flags())
            .await
            .expect_err("second enroll should fail");
        assert!(err.to_string().contains("not eligible"));
    }

    #[tokio::test]
    async fn assign_teacher_sets_and_clears_owner() {
        let temp = TempDir::new().expect("tempdir should create");
        let file = temp.path().join("catalog.json");
        std::fs::write(&file, DOC).expect("doc should write");
        let ctx = AppContext::init(RegConfig::default(), Some(":memory:"))
            .await
            .expect("context should init");
        dispatch(Commands::Import(ImportArgs { file }), &ctx, &flags())
            .await
            .expect("import should succeed");

        let course = ctx
            .service
            .get_course_by_code("CSE-101")
            .await
            .expect("course should exist");
        let offering = ctx
            .service
            .latest_course_session(&course.id)
            .await
            .expect("offering lookup should work")
            .expect("offering should exist");
        let teachers = ctx
            .service
            .list_users(Some(Role::Teacher), 10)
            .await
            .expect("users should list");
        let students = ctx
            .service
            .list_users(Some(Role::Student), 10)
            .await
            .expect("users should list");
        let teacher = teachers[0].id.as_str();
        let student = students[0].id.as_str();

        dispatch(assign_teacher(&offering.id, Some(teacher)), &ctx, &flags())
            .await
            .expect("assign should succeed");
        let owned = ctx
            .service
            .get_course_session(&offering.id)
            .await
            .expect("offering should load");
        assert_eq!(owned.teacher_id.as_deref(), Some(teacher));

        let err = dispatch(assign_teacher(&offering.id, Some(student)), &ctx, &flags())
            .await
            .expect_err("students cannot own offerings");
        assert!(err.to_string().contains("is not a teacher"));

        dispatch(assign_teacher(&offering.id, None), &ctx, &flags())
            .await
            .expect("clear should succeed");
        let cleared = ctx
            .service
            .get_course_session(&offering.id)
            .await
            .expect("offering should load");
        assert_eq!(cleared.teacher_id, None);
    }
}

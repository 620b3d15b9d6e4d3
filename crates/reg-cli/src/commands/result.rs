use crate::cli::GlobalFlags;
use crate::cli::subcommands::ResultCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `regr result`.
pub async fn handle(
    action: &ResultCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ResultCommands::Course { student, course } => {
            let best = ctx.service.best_result_for_course(student, course).await?;
            output(&best, flags.format)
        }
        ResultCommands::Semester {
            student,
            year,
            semester,
        } => {
            let report = ctx
                .service
                .semester_report(student, *year, *semester)
                .await?;
            output(&report, flags.format)
        }
    }
}

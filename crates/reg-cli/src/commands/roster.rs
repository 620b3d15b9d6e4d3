use serde::Serialize;

use reg_core::entities::Enrollment;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RosterCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RosterListResponse {
    enrollments: Vec<Enrollment>,
}

/// Handle `regr roster`.
pub async fn handle(
    action: &RosterCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RosterCommands::Create { offering } => {
            let response = ctx.service.enroll_all_eligible_students(offering).await?;
            output(&response, flags.format)
        }
        RosterCommands::List { offering, actor } => {
            let actor = ctx.service.get_user(actor).await?;
            let mut enrollments = ctx.service.session_roster(&actor, offering).await?;
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            enrollments.truncate(usize::try_from(limit)?);
            output(&RosterListResponse { enrollments }, flags.format)
        }
    }
}

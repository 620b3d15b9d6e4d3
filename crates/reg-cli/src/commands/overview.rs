use serde::Serialize;

use reg_core::responses::EnrollmentOverview;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OverviewArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct OverviewResponse {
    enrollments: Vec<EnrollmentOverview>,
}

/// Handle `regr overview`.
pub async fn handle(
    args: &OverviewArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let enrollments = ctx.service.enrollment_overview(&args.student, limit).await?;
    output(&OverviewResponse { enrollments }, flags.format)
}

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EligibilityArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `regr eligibility`.
pub async fn handle(
    args: &EligibilityArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = ctx
        .service
        .check_eligibility(&args.student, &args.offering)
        .await?;
    output(&response, flags.format)
}

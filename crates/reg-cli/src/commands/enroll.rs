use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EnrollArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `regr enroll`.
pub async fn handle(
    args: &EnrollArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = match (&args.offering, &args.course) {
        (Some(offering), None) => ctx.service.enroll(&args.student, offering).await?,
        (None, Some(course)) => {
            ctx.service
                .enroll_in_latest_offering(&args.student, course)
                .await?
        }
        _ => bail!("pass exactly one of --offering or --course"),
    };
    output(&response, flags.format)
}

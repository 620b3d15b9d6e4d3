use serde::Serialize;

use reg_core::entities::User;
use reg_core::enums::Role;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct UserListResponse {
    users: Vec<User>,
}

/// Handle `regr user`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::List { role } => {
            let role = role
                .as_deref()
                .map(|raw| parse_enum::<Role>(raw, "role"))
                .transpose()?;
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            let users = ctx.service.list_users(role, limit).await?;
            output(&UserListResponse { users }, flags.format)
        }
        UserCommands::Get { id } => output(&ctx.service.get_user(id).await?, flags.format),
    }
}

use anyhow::Context;

use reg_core::entities::Marks;
use reg_core::responses::MarksUpdateResponse;
use reg_db::inputs::MarksEntry;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MarksCommands;
use crate::commands::shared::read::read_document;
use crate::context::AppContext;
use crate::output::output;

/// Handle `regr marks`.
pub async fn handle(
    action: &MarksCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MarksCommands::Set {
            enrollment,
            actor,
            class_assessment,
            final_term,
        } => {
            let actor = ctx.service.get_user(actor).await?;
            let marks = Marks {
                class_assessment_marks: *class_assessment,
                final_term_marks: *final_term,
            };
            let updated = ctx.service.update_marks(&actor, enrollment, marks).await?;
            output(
                &MarksUpdateResponse {
                    updated: vec![updated],
                },
                flags.format,
            )
        }
        MarksCommands::Import {
            offering,
            actor,
            file,
        } => {
            let actor = ctx.service.get_user(actor).await?;
            let entries: Vec<MarksEntry> = serde_json::from_str(&read_document(file)?)
                .with_context(|| format!("invalid marks document {}", file.display()))?;
            let response = ctx
                .service
                .update_marks_bulk(&actor, offering, &entries)
                .await?;
            output(&response, flags.format)
        }
        MarksCommands::Finalize { enrollment, undo } => {
            let updated = ctx.service.set_finalized(enrollment, !undo).await?;
            output(&updated, flags.format)
        }
    }
}

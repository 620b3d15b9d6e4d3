use reg_db::import::CatalogImport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::commands::shared::read::read_document;
use crate::context::AppContext;
use crate::output::output;

/// Handle `regr import`.
pub async fn handle(
    args: &ImportArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let doc = CatalogImport::from_json(&read_document(&args.file)?)?;
    let response = ctx.service.import_catalog(&doc).await?;
    output(&response, flags.format)
}

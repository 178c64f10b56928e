use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TagCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atrium tag`.
pub async fn handle(action: &TagCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TagCommands::List => {
            let tags = ctx.service.list_tags().await?;
            output(&tags, flags.format)
        }
        TagCommands::Add { project_id, name } => {
            let tag = ctx.service.tag_project(*project_id, name).await?;
            output(&tag, flags.format)
        }
        TagCommands::Remove { project_id, name } => {
            ctx.service.untag_project(*project_id, name).await?;
            output(
                &json!({ "project_id": project_id, "removed": name }),
                flags.format,
            )
        }
    }
}

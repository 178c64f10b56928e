mod create;
mod delete;
mod get;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;

/// Handle `atrium project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Create(args) => create::run(args, ctx, flags).await,
        ProjectCommands::Get { id } => get::run(*id, ctx, flags).await,
        ProjectCommands::Update(args) => update::run(args, ctx, flags).await,
        ProjectCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}

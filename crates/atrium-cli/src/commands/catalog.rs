use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atrium categories`.
pub async fn handle_categories(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let categories = ctx.service.list_categories().await?;
    output(&categories, flags.format)
}

/// Handle `atrium clients`.
pub async fn handle_clients(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let clients = ctx.service.list_clients().await?;
    output(&clients, flags.format)
}

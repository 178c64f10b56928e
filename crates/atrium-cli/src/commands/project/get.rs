use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let detail = ctx
        .service
        .get_project(id)
        .await
        .with_context(|| format!("project {id} not found"))?;
    output(&detail, flags.format)
}

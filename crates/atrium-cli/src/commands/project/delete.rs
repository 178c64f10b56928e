use anyhow::Context;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service
        .delete_project(id)
        .await
        .with_context(|| format!("failed to delete project {id}"))?;
    output(&json!({ "deleted": id }), flags.format)
}

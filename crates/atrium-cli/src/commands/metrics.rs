use atrium_core::inputs::MetricsInput;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MetricsCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atrium metrics`.
pub async fn handle(
    action: &MetricsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MetricsCommands::Set {
            project_id,
            impact,
            satisfaction_score,
            implementation_status,
        } => {
            if let Some(score) = satisfaction_score
                && !(0.0..=100.0).contains(score)
            {
                anyhow::bail!("satisfaction score must be between 0 and 100, got {score}");
            }
            let metrics = ctx
                .service
                .update_metrics(
                    *project_id,
                    MetricsInput {
                        impact: impact.clone(),
                        satisfaction_score: *satisfaction_score,
                        implementation_status: implementation_status.clone(),
                    },
                )
                .await?;
            output(&metrics, flags.format)
        }
        MetricsCommands::Get { project_id } => {
            let metrics = ctx.service.get_metrics(*project_id).await?;
            output(&metrics, flags.format)
        }
    }
}

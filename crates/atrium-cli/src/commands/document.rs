use anyhow::Context;
use atrium_core::enums::DocType;
use atrium_core::inputs::NewDocument;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DocumentCommands;
use crate::commands::shared::parse::parse_optional_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atrium document`.
pub async fn handle(
    action: &DocumentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DocumentCommands::Add {
            project_id,
            title,
            drive_id,
            drive_url,
            doc_type,
        } => {
            let doc_type = parse_optional_enum::<DocType>(doc_type.as_deref(), "doc type")?;
            ctx.service
                .add_research_document(
                    *project_id,
                    NewDocument {
                        title: title.clone(),
                        drive_id: drive_id.clone(),
                        drive_url: drive_url.clone(),
                        doc_type,
                    },
                )
                .await
                .with_context(|| format!("failed to add document to project {project_id}"))?;

            let documents = ctx.service.list_documents(*project_id).await?;
            output(&documents, flags.format)
        }
        DocumentCommands::List { project_id } => {
            let documents = ctx.service.list_documents(*project_id).await?;
            output(&documents, flags.format)
        }
    }
}

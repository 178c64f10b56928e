use atrium_core::enums::ProjectStatus;
use atrium_db::updates::project::{ProjectUpdate, ProjectUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectUpdateArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ProjectUpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = build_update(args)?;
    if update.is_empty() {
        anyhow::bail!("project update requires at least one field flag");
    }

    let project = ctx.service.update_project(args.id, update).await?;
    output(&project, flags.format)
}

fn build_update(args: &ProjectUpdateArgs) -> anyhow::Result<ProjectUpdate> {
    let mut builder = ProjectUpdateBuilder::new();
    if let Some(title) = &args.title {
        builder = builder.title(title);
    }
    if let Some(summary) = &args.summary {
        builder = builder.summary(Some(summary.clone()));
    }
    if let Some(category) = &args.category {
        builder = builder.category(Some(category.clone()));
    }
    if let Some(client_id) = args.client_id {
        builder = builder.client_id(Some(client_id));
    }
    if args.clear_client {
        builder = builder.client_id(None);
    }
    if let Some(start_date) = args.start_date {
        builder = builder.start_date(Some(start_date));
    }
    if let Some(end_date) = args.end_date {
        builder = builder.end_date(Some(end_date));
    }
    if let Some(status) = &args.status {
        builder = builder.status(Some(parse_enum::<ProjectStatus>(status, "status")?));
    }
    Ok(builder.build())
}

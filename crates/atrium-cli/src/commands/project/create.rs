use atrium_core::enums::ProjectStatus;
use atrium_core::inputs::NewProject;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCreateArgs;
use crate::commands::shared::parse::parse_optional_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ProjectCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = new_project(args)?;
    let project = ctx.service.create_project(input).await?;
    let detail = ctx.service.get_project(project.id).await?;
    output(&detail, flags.format)
}

fn new_project(args: &ProjectCreateArgs) -> anyhow::Result<NewProject> {
    Ok(NewProject {
        title: args.title.clone(),
        summary: args.summary.clone(),
        category: args.category.clone(),
        client_id: args.client_id,
        start_date: args.start_date,
        end_date: args.end_date,
        status: parse_optional_enum::<ProjectStatus>(args.status.as_deref(), "status")?,
        tags: args.tag.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(status: Option<&str>) -> ProjectCreateArgs {
        ProjectCreateArgs {
            title: "Study".into(),
            summary: None,
            category: Some("Imaging".into()),
            client_id: Some(3),
            start_date: None,
            end_date: None,
            status: status.map(String::from),
            tag: vec!["mri".into()],
        }
    }

    #[test]
    fn maps_flags_onto_input() {
        let input = new_project(&args(Some("active"))).expect("input should build");
        assert_eq!(input.title, "Study");
        assert_eq!(input.client_id, Some(3));
        assert_eq!(input.status, Some(ProjectStatus::Active));
        assert_eq!(input.tags, vec!["mri".to_string()]);
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(new_project(&args(Some("paused"))).is_err());
    }
}

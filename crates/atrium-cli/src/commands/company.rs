use crate::cli::GlobalFlags;
use crate::cli::subcommands::CompanyCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atrium company`.
pub async fn handle(
    action: &CompanyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CompanyCommands::Add { name, industry } => {
            let company = ctx
                .service
                .create_company(name, industry.as_deref())
                .await?;
            output(&company, flags.format)
        }
        CompanyCommands::List => {
            let companies = ctx.service.list_companies().await?;
            output(&companies, flags.format)
        }
    }
}

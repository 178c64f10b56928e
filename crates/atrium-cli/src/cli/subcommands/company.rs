use clap::Subcommand;

/// Client company commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CompanyCommands {
    /// Register a company.
    Add {
        name: String,
        #[arg(long)]
        industry: Option<String>,
    },
    /// List all companies.
    List,
}

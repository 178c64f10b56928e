use chrono::NaiveDate;
use clap::{Args, Subcommand};

use super::subcommands::{
    CompanyCommands, DocumentCommands, MetricsCommands, ProjectCommands, TagCommands,
};

/// Root command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List distinct project categories.
    Categories,
    /// List companies that own at least one project.
    Clients,
    /// Query research projects with optional filters.
    Research(ResearchArgs),
    /// Project management.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Project outcome metrics.
    Metrics {
        #[command(subcommand)]
        action: MetricsCommands,
    },
    /// Project documents.
    Document {
        #[command(subcommand)]
        action: DocumentCommands,
    },
    /// Client companies.
    Company {
        #[command(subcommand)]
        action: CompanyCommands,
    },
    /// Tags.
    Tag {
        #[command(subcommand)]
        action: TagCommands,
    },
}

/// Filter flags for `atrium research`. All are optional and combine with AND.
#[derive(Clone, Debug, Args)]
pub struct ResearchArgs {
    /// Exact category
    #[arg(long)]
    pub category: Option<String>,
    /// Exact client company name
    #[arg(long)]
    pub client: Option<String>,
    /// Projects starting on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Projects ending on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Case-insensitive text search over titles, summaries, clients, and tags
    #[arg(long)]
    pub search: Option<String>,
}

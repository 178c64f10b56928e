use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Research project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project.
    Create(ProjectCreateArgs),
    /// Get a project with its client, tags, metrics, and documents.
    Get { id: i64 },
    /// Update a project.
    Update(ProjectUpdateArgs),
    /// Delete a project and everything attached to it.
    Delete { id: i64 },
}

#[derive(Clone, Debug, Args)]
pub struct ProjectCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub summary: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Owning company ID
    #[arg(long)]
    pub client_id: Option<i64>,
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    /// planned, active, on_hold, completed, cancelled
    #[arg(long)]
    pub status: Option<String>,
    /// Tag name (repeatable)
    #[arg(long)]
    pub tag: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub summary: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub client_id: Option<i64>,
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    #[arg(long)]
    pub status: Option<String>,
    /// Detach the owning company
    #[arg(long, conflicts_with = "client_id")]
    pub clear_client: bool,
}

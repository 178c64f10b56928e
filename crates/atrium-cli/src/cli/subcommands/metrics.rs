use clap::Subcommand;

/// Project metrics commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MetricsCommands {
    /// Record or replace a project's metrics. Omitted fields are cleared.
    Set {
        project_id: i64,
        #[arg(long)]
        impact: Option<String>,
        /// 0 to 100
        #[arg(long)]
        satisfaction_score: Option<f64>,
        #[arg(long)]
        implementation_status: Option<String>,
    },
    /// Show a project's metrics.
    Get { project_id: i64 },
}

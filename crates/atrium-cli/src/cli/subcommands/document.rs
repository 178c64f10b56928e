use clap::Subcommand;

/// Project document commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DocumentCommands {
    /// Attach a document to a project.
    Add {
        project_id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        drive_id: Option<String>,
        #[arg(long)]
        drive_url: Option<String>,
        /// report, presentation, spreadsheet, dataset, transcript, other
        #[arg(long)]
        doc_type: Option<String>,
    },
    /// List a project's documents.
    List { project_id: i64 },
}

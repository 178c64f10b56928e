use clap::Subcommand;

/// Tag commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TagCommands {
    /// List all tags.
    List,
    /// Attach a tag to a project.
    Add { project_id: i64, name: String },
    /// Detach a tag from a project.
    Remove { project_id: i64, name: String },
}

mod company;
mod document;
mod metrics;
mod project;
mod tag;

pub use company::CompanyCommands;
pub use document::DocumentCommands;
pub use metrics::MetricsCommands;
pub use project::{ProjectCommands, ProjectCreateArgs, ProjectUpdateArgs};
pub use tag::TagCommands;

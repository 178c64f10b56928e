//! Entity structs for the research corpus.
//!
//! Each entity maps to a table in the libSQL database (see
//! `atrium-db/migrations/001_initial.sql`). `ResearchDataView` is the only
//! shape the query gateway returns; it is computed at read time and never
//! persisted.

mod company;
mod document;
mod metrics;
mod project;
mod tag;
mod view;

pub use company::Company;
pub use document::ResearchDocument;
pub use metrics::ResearchMetrics;
pub use project::{ProjectDetail, ResearchProject};
pub use tag::{ProjectTag, Tag};
pub use view::{DocumentView, MetricsView, ResearchDataView};

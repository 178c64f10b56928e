//! Repository modules implementing the gateway operations.
//!
//! Each module adds methods to `ResearchService` via `impl ResearchService` blocks.

pub mod catalog;
pub mod company;
pub mod document;
pub mod metrics;
pub mod project;
pub mod query;
pub mod tag;

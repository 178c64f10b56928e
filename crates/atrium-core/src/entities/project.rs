use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Company, ResearchDocument, ResearchMetrics, Tag};
use crate::enums::ProjectStatus;

/// A research project, optionally owned by a client company.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchProject {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub category: Option<String>,
    /// `None` for unaffiliated projects.
    pub client_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A project with every relation eagerly resolved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProjectDetail {
    pub project: ResearchProject,
    pub client: Option<Company>,
    pub tags: Vec<Tag>,
    pub metrics: Option<ResearchMetrics>,
    pub documents: Vec<ResearchDocument>,
}

impl ProjectDetail {
    /// Tag names in the order they were loaded.
    #[must_use]
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|tag| tag.name.as_str()).collect()
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{DocType, ProjectStatus};

/// Denormalized read projection: one record per project.
///
/// Serialized in `camelCase`, the shape the portal front end consumes.
/// `tags` and `documents` are always present, empty when there are none.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchDataView {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub category: Option<String>,
    /// Owning company name.
    pub client: Option<String>,
    pub client_industry: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub metrics: Option<MetricsView>,
    #[serde(default)]
    pub documents: Vec<DocumentView>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsView {
    pub impact: Option<String>,
    pub satisfaction_score: Option<f64>,
    pub implementation_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub id: i64,
    pub title: String,
    pub drive_id: Option<String>,
    pub drive_url: Option<String>,
    pub doc_type: Option<DocType>,
}

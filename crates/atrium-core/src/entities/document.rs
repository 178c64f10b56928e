use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DocType;

/// A document attached to exactly one project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchDocument {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub drive_id: Option<String>,
    pub drive_url: Option<String>,
    pub doc_type: Option<DocType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

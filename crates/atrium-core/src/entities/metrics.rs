use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome metrics for a project. At most one per project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ResearchMetrics {
    pub id: i64,
    pub project_id: i64,
    pub impact: Option<String>,
    /// 0 to 100, enforced by the store.
    pub satisfaction_score: Option<f64>,
    pub implementation_status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//! Input payloads for gateway mutations.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{DocType, ProjectStatus};

/// Input for creating a research project. Only `title` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub client_id: Option<i64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    /// Tag names, resolved by name and created on first use.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewProject {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Distinct, non-blank tag names in first-seen order.
    #[must_use]
    pub fn distinct_tags(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.tags.len());
        for tag in &self.tags {
            let tag = tag.trim();
            if !tag.is_empty() && !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        seen
    }
}

/// Replacement values for a project's metrics row.
///
/// Upserting writes every field, so an omitted field clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsInput {
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub satisfaction_score: Option<f64>,
    #[serde(default)]
    pub implementation_status: Option<String>,
}

/// A document to append to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub title: String,
    #[serde(default)]
    pub drive_id: Option<String>,
    #[serde(default)]
    pub drive_url: Option<String>,
    #[serde(default)]
    pub doc_type: Option<DocType>,
}

impl NewDocument {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_tags_dedupes_and_trims() {
        let project = NewProject {
            tags: vec![
                "nlp".into(),
                " nlp ".into(),
                String::new(),
                "telehealth".into(),
                "nlp".into(),
            ],
            ..NewProject::titled("Study")
        };
        assert_eq!(project.distinct_tags(), vec!["nlp", "telehealth"]);
    }

    #[test]
    fn new_project_accepts_minimal_json() {
        let project: NewProject = serde_json::from_str(r#"{"title":"Only a title"}"#).unwrap();
        assert_eq!(project, NewProject::titled("Only a title"));
    }

    #[test]
    fn new_project_reads_camel_case() {
        let project: NewProject = serde_json::from_str(
            r#"{"title":"T","clientId":7,"startDate":"2025-02-01","status":"active","tags":["a"]}"#,
        )
        .unwrap();
        assert_eq!(project.client_id, Some(7));
        assert_eq!(project.status, Some(ProjectStatus::Active));
        assert_eq!(project.tags, vec!["a".to_string()]);
    }
}

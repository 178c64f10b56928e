//! The research filter value object.
//!
//! Four independent, optional narrowing dimensions combined with logical AND.
//! An absent dimension places no constraint on the result. Date ordering is
//! not validated: an inverted range is a legal filter that matches nothing.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResearchFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl ResearchFilter {
    /// A filter that matches every record.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    #[must_use]
    pub fn with_start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    #[must_use]
    pub fn with_end_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Category to bind, with empty strings treated as absent.
    #[must_use]
    pub fn category_param(&self) -> Option<&str> {
        non_empty(self.category.as_deref())
    }

    /// Client name to bind, with empty strings treated as absent.
    #[must_use]
    pub fn client_param(&self) -> Option<&str> {
        non_empty(self.client.as_deref())
    }

    /// Search term to bind, trimmed, with blank input treated as absent.
    #[must_use]
    pub fn search_param(&self) -> Option<&str> {
        non_empty(self.search_term.as_deref().map(str::trim))
    }

    /// True when no dimension constrains the result.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.category_param().is_none()
            && self.client_param().is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.search_param().is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

//! The filtered research query over `research_data_view`.

use atrium_core::entities::{DocumentView, MetricsView, ResearchDataView};
use atrium_core::filter::ResearchFilter;

use crate::error::DatabaseError;
use crate::helpers::{
    date_or_null, get_opt_string, like_escape, parse_datetime, parse_json_column,
    parse_optional_date, parse_optional_enum, text_or_null,
};
use crate::service::ResearchService;

/// Each dimension is `?N IS NULL OR <predicate>`, so an unbound dimension
/// places no constraint and the whole filter is a plain conjunction.
const QUERY_RESEARCH_SQL: &str = r"SELECT id, title, summary, category, client, client_industry,
       start_date, end_date, status, created_at, tags, metrics, documents
FROM research_data_view v
WHERE (?1 IS NULL OR v.category = ?1)
  AND (?2 IS NULL OR v.client = ?2)
  AND (?3 IS NULL OR v.start_date >= ?3)
  AND (?4 IS NULL OR COALESCE(v.end_date, v.start_date) <= ?4)
  AND (?5 IS NULL
       OR v.title LIKE ?5 ESCAPE '\'
       OR v.summary LIKE ?5 ESCAPE '\'
       OR v.category LIKE ?5 ESCAPE '\'
       OR v.client LIKE ?5 ESCAPE '\'
       OR EXISTS (SELECT 1 FROM project_tags pt
                  JOIN tags t ON t.id = pt.tag_id
                  WHERE pt.project_id = v.id AND t.name LIKE ?5 ESCAPE '\'))
ORDER BY v.created_at DESC, v.id DESC";

fn row_to_view(row: &libsql::Row) -> Result<ResearchDataView, DatabaseError> {
    let mut tags: Vec<String> =
        parse_json_column(get_opt_string(row, 10)?.as_deref())?.unwrap_or_default();
    tags.sort();

    let metrics: Option<MetricsView> = parse_json_column(get_opt_string(row, 11)?.as_deref())?;

    let mut documents: Vec<DocumentView> =
        parse_json_column(get_opt_string(row, 12)?.as_deref())?.unwrap_or_default();
    documents.sort_by_key(|doc| doc.id);

    Ok(ResearchDataView {
        id: row.get::<i64>(0)?,
        title: row.get::<String>(1)?,
        summary: get_opt_string(row, 2)?,
        category: get_opt_string(row, 3)?,
        client: get_opt_string(row, 4)?,
        client_industry: get_opt_string(row, 5)?,
        start_date: parse_optional_date(get_opt_string(row, 6)?.as_deref())?,
        end_date: parse_optional_date(get_opt_string(row, 7)?.as_deref())?,
        status: parse_optional_enum(get_opt_string(row, 8)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
        tags,
        metrics,
        documents,
    })
}

impl ResearchService {
    /// Return every project matching all present filter dimensions, newest first.
    ///
    /// Runs as a single statement against `research_data_view`, so each
    /// record carries its client, tags, metrics, and documents.
    ///
    /// The search term matches as a substring with ASCII case folding only:
    /// `LIKE` leaves letters outside ASCII (`Ä`, `é`) case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn query_research(
        &self,
        filter: &ResearchFilter,
    ) -> Result<Vec<ResearchDataView>, DatabaseError> {
        let search = filter
            .search_param()
            .map(|term| format!("%{}%", like_escape(term)));

        let params = vec![
            text_or_null(filter.category_param()),
            text_or_null(filter.client_param()),
            date_or_null(filter.start_date),
            date_or_null(filter.end_date),
            text_or_null(search.as_deref()),
        ];

        let mut rows = self
            .db()
            .conn()
            .query(QUERY_RESEARCH_SQL, libsql::params_from_iter(params))
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_view(&row)?);
        }

        tracing::debug!(
            category = ?filter.category_param(),
            client = ?filter.client_param(),
            search = ?filter.search_param(),
            results = results.len(),
            "queried research data"
        );
        Ok(results)
    }
}

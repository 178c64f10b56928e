//! Research metrics repository — one replaceable row per project.

use chrono::Utc;

use atrium_core::entities::ResearchMetrics;
use atrium_core::inputs::MetricsInput;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, real_or_null, text_or_null};
use crate::service::ResearchService;

fn row_to_metrics(row: &libsql::Row) -> Result<ResearchMetrics, DatabaseError> {
    Ok(ResearchMetrics {
        id: row.get::<i64>(0)?,
        project_id: row.get::<i64>(1)?,
        impact: get_opt_string(row, 2)?,
        satisfaction_score: row.get::<Option<f64>>(3)?,
        implementation_status: get_opt_string(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl ResearchService {
    /// Insert or fully replace the metrics of a project.
    ///
    /// Every field is written, so a field left `None` clears the stored
    /// value. The row keeps its `id` and `created_at` across replacements.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the satisfaction score is NaN
    /// or infinite, and `DatabaseError::LibSql` if the project does not exist
    /// or the score is outside 0 to 100.
    pub async fn update_metrics(
        &self,
        project_id: i64,
        input: MetricsInput,
    ) -> Result<ResearchMetrics, DatabaseError> {
        if let Some(score) = input.satisfaction_score
            && !score.is_finite()
        {
            return Err(DatabaseError::InvalidState(format!(
                "satisfaction score must be a finite number, got {score}"
            )));
        }
        let now = Utc::now().to_rfc3339();
        self.db()
            .conn()
            .execute(
                "INSERT INTO research_metrics
                    (project_id, impact, satisfaction_score, implementation_status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)
                 ON CONFLICT(project_id) DO UPDATE SET
                    impact = excluded.impact,
                    satisfaction_score = excluded.satisfaction_score,
                    implementation_status = excluded.implementation_status,
                    updated_at = excluded.updated_at",
                libsql::params_from_iter(vec![
                    libsql::Value::Integer(project_id),
                    text_or_null(input.impact.as_deref()),
                    real_or_null(input.satisfaction_score),
                    text_or_null(input.implementation_status.as_deref()),
                    libsql::Value::Text(now),
                ]),
            )
            .await?;

        tracing::debug!(project_id, "upserted research metrics");

        self.get_metrics(project_id)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    /// Metrics of a project, `None` if never recorded.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_metrics(
        &self,
        project_id: i64,
    ) -> Result<Option<ResearchMetrics>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, project_id, impact, satisfaction_score, implementation_status,
                        created_at, updated_at
                 FROM research_metrics WHERE project_id = ?1",
                libsql::params![project_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_metrics(&row)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{create_test_project, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn metrics_absent_until_recorded() {
        let svc = test_service().await;
        let project = create_test_project(&svc, "Study", None, None, &[]).await;
        assert!(svc.get_metrics(project.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn second_update_supersedes_first() {
        let svc = test_service().await;
        let project = create_test_project(&svc, "Study", None, None, &[]).await;

        let first = svc
            .update_metrics(
                project.id,
                MetricsInput {
                    impact: Some("Low".into()),
                    satisfaction_score: Some(40.0),
                    implementation_status: Some("pilot".into()),
                },
            )
            .await
            .unwrap();
        let second = svc
            .update_metrics(
                project.id,
                MetricsInput {
                    impact: Some("High".into()),
                    satisfaction_score: Some(90.0),
                    implementation_status: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.impact.as_deref(), Some("High"));
        assert_eq!(second.satisfaction_score, Some(90.0));
        assert_eq!(second.implementation_status, None);

        let count: i64 = {
            let mut rows = svc
                .db()
                .conn()
                .query(
                    "SELECT COUNT(*) FROM research_metrics WHERE project_id = ?1",
                    libsql::params![project.id],
                )
                .await
                .unwrap();
            rows.next().await.unwrap().unwrap().get(0).unwrap()
        };
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn score_out_of_range_is_rejected() {
        let svc = test_service().await;
        let project = create_test_project(&svc, "Study", None, None, &[]).await;
        let result = svc
            .update_metrics(
                project.id,
                MetricsInput {
                    satisfaction_score: Some(140.0),
                    ..MetricsInput::default()
                },
            )
            .await;
        assert!(matches!(result, Err(DatabaseError::LibSql(_))));
    }

    #[tokio::test]
    async fn non_finite_score_is_rejected() {
        let svc = test_service().await;
        let project = create_test_project(&svc, "Study", None, None, &[]).await;

        for score in [f64::NAN, f64::INFINITY] {
            let result = svc
                .update_metrics(
                    project.id,
                    MetricsInput {
                        satisfaction_score: Some(score),
                        ..MetricsInput::default()
                    },
                )
                .await;
            assert!(matches!(result, Err(DatabaseError::InvalidState(_))));
        }
        assert!(svc.get_metrics(project.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn metrics_for_missing_project_fail() {
        let svc = test_service().await;
        let result = svc.update_metrics(404, MetricsInput::default()).await;
        assert!(matches!(result, Err(DatabaseError::LibSql(_))));
    }
}

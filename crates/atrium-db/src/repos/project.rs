//! Research project repository — transactional create, eager get, update, delete.

use chrono::{DateTime, Utc};

use atrium_core::entities::{ProjectDetail, ResearchProject};
use atrium_core::enums::ProjectStatus;
use atrium_core::inputs::NewProject;

use crate::error::DatabaseError;
use crate::helpers::{
    date_or_null, get_opt_string, integer_or_null, parse_datetime, parse_optional_date,
    parse_optional_enum, text_or_null,
};
use crate::repos::tag::{link_tag, upsert_tag};
use crate::service::ResearchService;
use crate::updates::project::ProjectUpdate;

const PROJECT_COLUMNS: &str = "id, title, summary, category, client_id, start_date, end_date, status, created_at, updated_at";

fn row_to_project(row: &libsql::Row) -> Result<ResearchProject, DatabaseError> {
    Ok(ResearchProject {
        id: row.get::<i64>(0)?,
        title: row.get::<String>(1)?,
        summary: get_opt_string(row, 2)?,
        category: get_opt_string(row, 3)?,
        client_id: row.get::<Option<i64>>(4)?,
        start_date: parse_optional_date(get_opt_string(row, 5)?.as_deref())?,
        end_date: parse_optional_date(get_opt_string(row, 6)?.as_deref())?,
        status: parse_optional_enum(get_opt_string(row, 7)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

/// Insert the project row and attach its tags on one connection.
async fn insert_project_with_tags(
    conn: &libsql::Connection,
    input: &NewProject,
    now: DateTime<Utc>,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO research_projects
            (title, summary, category, client_id, start_date, end_date, status, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
        libsql::params_from_iter(vec![
            libsql::Value::Text(input.title.clone()),
            text_or_null(input.summary.as_deref()),
            text_or_null(input.category.as_deref()),
            integer_or_null(input.client_id),
            date_or_null(input.start_date),
            date_or_null(input.end_date),
            text_or_null(input.status.map(ProjectStatus::as_str)),
            libsql::Value::Text(now.to_rfc3339()),
        ]),
    )
    .await?;
    let project_id = conn.last_insert_rowid();

    for name in input.distinct_tags() {
        let tag_id = upsert_tag(conn, name, now).await?;
        link_tag(conn, project_id, tag_id, now).await?;
    }

    Ok(project_id)
}

impl ResearchService {
    /// Create a research project and attach its tags.
    ///
    /// Tag names are resolved by upsert, so repeated names never create
    /// duplicate tags. The project insert and the tag links share one
    /// transaction: on any failure nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if any statement fails (e.g., unknown
    /// `client_id`).
    pub async fn create_project(&self, input: NewProject) -> Result<ResearchProject, DatabaseError> {
        let now = Utc::now();
        let tx = self.db().conn().transaction().await?;

        let project_id = match insert_project_with_tags(&tx, &input, now).await {
            Ok(id) => id,
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::warn!(%rollback_error, "rollback of failed project create failed");
                }
                return Err(error);
            }
        };
        tx.commit().await?;

        tracing::info!(
            project_id,
            title = %input.title,
            tags = input.tags.len(),
            "created research project"
        );

        Ok(ResearchProject {
            id: project_id,
            title: input.title,
            summary: input.summary,
            category: input.category,
            client_id: input.client_id,
            start_date: input.start_date,
            end_date: input.end_date,
            status: input.status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a project row without its relations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the project does not exist.
    pub async fn get_research_project(&self, id: i64) -> Result<ResearchProject, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PROJECT_COLUMNS} FROM research_projects WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_project(&row)
    }

    /// Get a project with client, tags, metrics, and documents resolved.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the project does not exist.
    pub async fn get_project(&self, id: i64) -> Result<ProjectDetail, DatabaseError> {
        let project = self.get_research_project(id).await?;

        let client = match project.client_id {
            Some(client_id) => Some(self.get_company(client_id).await?),
            None => None,
        };
        let tags = self.get_project_tags(id).await?;
        let metrics = self.get_metrics(id).await?;
        let documents = self.list_documents(id).await?;

        Ok(ProjectDetail {
            project,
            client,
            tags,
            metrics,
            documents,
        })
    }

    /// Update a project with dynamic SET clauses. Only supplied fields change.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the project does not exist.
    pub async fn update_project(
        &self,
        project_id: i64,
        update: ProjectUpdate,
    ) -> Result<ResearchProject, DatabaseError> {
        let now = Utc::now();
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref title) = update.title {
            params.push(libsql::Value::Text(title.clone()));
            sets.push(format!("title = ?{idx}"));
            idx += 1;
        }
        if let Some(ref summary) = update.summary {
            params.push(text_or_null(summary.as_deref()));
            sets.push(format!("summary = ?{idx}"));
            idx += 1;
        }
        if let Some(ref category) = update.category {
            params.push(text_or_null(category.as_deref()));
            sets.push(format!("category = ?{idx}"));
            idx += 1;
        }
        if let Some(client_id) = update.client_id {
            params.push(integer_or_null(client_id));
            sets.push(format!("client_id = ?{idx}"));
            idx += 1;
        }
        if let Some(start_date) = update.start_date {
            params.push(date_or_null(start_date));
            sets.push(format!("start_date = ?{idx}"));
            idx += 1;
        }
        if let Some(end_date) = update.end_date {
            params.push(date_or_null(end_date));
            sets.push(format!("end_date = ?{idx}"));
            idx += 1;
        }
        if let Some(status) = update.status {
            params.push(text_or_null(status.map(ProjectStatus::as_str)));
            sets.push(format!("status = ?{idx}"));
            idx += 1;
        }

        params.push(libsql::Value::Text(now.to_rfc3339()));
        sets.push(format!("updated_at = ?{idx}"));
        idx += 1;

        params.push(libsql::Value::Integer(project_id));
        let sql = format!(
            "UPDATE research_projects SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );

        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }

        self.get_research_project(project_id).await
    }

    /// Hard-delete a project. Tags links, metrics, and documents cascade;
    /// the tags themselves are kept.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the project does not exist.
    pub async fn delete_project(&self, project_id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "DELETE FROM research_projects WHERE id = ?1",
                libsql::params![project_id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }

        tracing::info!(project_id, "deleted research project");
        Ok(())
    }
}

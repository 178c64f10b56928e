//! Research document repository — append and list.

use chrono::Utc;

use atrium_core::entities::ResearchDocument;
use atrium_core::enums::DocType;
use atrium_core::inputs::NewDocument;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_optional_enum, text_or_null};
use crate::service::ResearchService;

fn row_to_document(row: &libsql::Row) -> Result<ResearchDocument, DatabaseError> {
    Ok(ResearchDocument {
        id: row.get::<i64>(0)?,
        project_id: row.get::<i64>(1)?,
        title: row.get::<String>(2)?,
        drive_id: get_opt_string(row, 3)?,
        drive_url: get_opt_string(row, 4)?,
        doc_type: parse_optional_enum(get_opt_string(row, 5)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl ResearchService {
    /// Append a document to a project. Existing documents are untouched.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the project does not exist.
    pub async fn add_research_document(
        &self,
        project_id: i64,
        input: NewDocument,
    ) -> Result<(), DatabaseError> {
        let now = Utc::now().to_rfc3339();
        self.db()
            .conn()
            .execute(
                "INSERT INTO research_documents
                    (project_id, title, drive_id, drive_url, doc_type, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
                libsql::params_from_iter(vec![
                    libsql::Value::Integer(project_id),
                    libsql::Value::Text(input.title),
                    text_or_null(input.drive_id.as_deref()),
                    text_or_null(input.drive_url.as_deref()),
                    text_or_null(input.doc_type.map(DocType::as_str)),
                    libsql::Value::Text(now),
                ]),
            )
            .await?;

        tracing::debug!(project_id, "added research document");
        Ok(())
    }

    /// Documents of a project in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_documents(
        &self,
        project_id: i64,
    ) -> Result<Vec<ResearchDocument>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, project_id, title, drive_id, drive_url, doc_type, created_at, updated_at
                 FROM research_documents WHERE project_id = ?1 ORDER BY id",
                libsql::params![project_id],
            )
            .await?;

        let mut documents = Vec::new();
        while let Some(row) = rows.next().await? {
            documents.push(row_to_document(&row)?);
        }
        Ok(documents)
    }
}

//! Tag repository — upsert-by-name and project tagging.

use chrono::{DateTime, Utc};

use atrium_core::entities::Tag;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::ResearchService;

fn row_to_tag(row: &libsql::Row) -> Result<Tag, DatabaseError> {
    Ok(Tag {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

/// Resolve a tag name to its ID, creating the tag on first use.
///
/// Takes a plain connection so it can run inside a transaction.
pub(crate) async fn upsert_tag(
    conn: &libsql::Connection,
    name: &str,
    now: DateTime<Utc>,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO tags (name, created_at) VALUES (?1, ?2) ON CONFLICT(name) DO NOTHING",
        libsql::params![name, now.to_rfc3339()],
    )
    .await?;

    let mut rows = conn
        .query("SELECT id FROM tags WHERE name = ?1", [name])
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}

/// Link a project to a tag. Linking twice is a no-op.
pub(crate) async fn link_tag(
    conn: &libsql::Connection,
    project_id: i64,
    tag_id: i64,
    now: DateTime<Utc>,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT OR IGNORE INTO project_tags (project_id, tag_id, created_at) VALUES (?1, ?2, ?3)",
        libsql::params![project_id, tag_id, now.to_rfc3339()],
    )
    .await?;
    Ok(())
}

impl ResearchService {
    /// List every tag ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, name, created_at FROM tags ORDER BY name", ())
            .await?;

        let mut tags = Vec::new();
        while let Some(row) = rows.next().await? {
            tags.push(row_to_tag(&row)?);
        }
        Ok(tags)
    }

    /// Tags attached to a project, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_project_tags(&self, project_id: i64) -> Result<Vec<Tag>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT t.id, t.name, t.created_at
                 FROM project_tags pt
                 JOIN tags t ON t.id = pt.tag_id
                 WHERE pt.project_id = ?1
                 ORDER BY t.name",
                libsql::params![project_id],
            )
            .await?;

        let mut tags = Vec::new();
        while let Some(row) = rows.next().await? {
            tags.push(row_to_tag(&row)?);
        }
        Ok(tags)
    }

    /// Attach a tag to an existing project, creating the tag if needed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the project does not exist.
    pub async fn tag_project(&self, project_id: i64, name: &str) -> Result<Tag, DatabaseError> {
        let now = Utc::now();
        let conn = self.db().conn();
        let tag_id = upsert_tag(conn, name, now).await?;
        link_tag(conn, project_id, tag_id, now).await?;

        let mut rows = conn
            .query(
                "SELECT id, name, created_at FROM tags WHERE id = ?1",
                libsql::params![tag_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_tag(&row)
    }

    /// Detach a tag from a project. The tag itself is kept.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the DELETE fails.
    pub async fn untag_project(&self, project_id: i64, name: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "DELETE FROM project_tags
                 WHERE project_id = ?1 AND tag_id = (SELECT id FROM tags WHERE name = ?2)",
                libsql::params![project_id, name],
            )
            .await?;
        Ok(())
    }
}

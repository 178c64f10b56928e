//! Option lists for the browser's filter controls.

use crate::error::DatabaseError;
use crate::service::ResearchService;

async fn collect_strings(
    conn: &libsql::Connection,
    sql: &str,
) -> Result<Vec<String>, DatabaseError> {
    let mut rows = conn.query(sql, ()).await?;
    let mut values = Vec::new();
    while let Some(row) = rows.next().await? {
        values.push(row.get::<String>(0)?);
    }
    Ok(values)
}

impl ResearchService {
    /// Distinct non-empty project categories, alphabetical.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<String>, DatabaseError> {
        collect_strings(
            self.db().conn(),
            "SELECT DISTINCT category FROM research_projects
             WHERE category IS NOT NULL AND category <> ''
             ORDER BY category",
        )
        .await
    }

    /// Names of companies that own at least one project, alphabetical.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_clients(&self) -> Result<Vec<String>, DatabaseError> {
        collect_strings(
            self.db().conn(),
            "SELECT c.name FROM companies c
             WHERE EXISTS (SELECT 1 FROM research_projects p WHERE p.client_id = c.id)
             ORDER BY c.name",
        )
        .await
    }
}

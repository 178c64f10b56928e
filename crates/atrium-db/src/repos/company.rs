//! Company repository — research client organizations.

use chrono::Utc;

use atrium_core::entities::Company;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, text_or_null};
use crate::service::ResearchService;

pub(crate) fn row_to_company(row: &libsql::Row) -> Result<Company, DatabaseError> {
    Ok(Company {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        industry: get_opt_string(row, 2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl ResearchService {
    /// Create a company. Names are unique.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the name already exists.
    pub async fn create_company(
        &self,
        name: &str,
        industry: Option<&str>,
    ) -> Result<Company, DatabaseError> {
        let now = Utc::now();
        let conn = self.db().conn();
        conn.execute(
            "INSERT INTO companies (name, industry, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
            libsql::params_from_iter(vec![
                libsql::Value::Text(name.to_string()),
                text_or_null(industry),
                libsql::Value::Text(now.to_rfc3339()),
            ]),
        )
        .await?;

        Ok(Company {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
            industry: industry.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a company by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the company does not exist.
    pub async fn get_company(&self, id: i64) -> Result<Company, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, industry, created_at, updated_at FROM companies WHERE id = ?1",
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_company(&row)
    }

    /// List all companies ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_companies(&self) -> Result<Vec<Company>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, industry, created_at, updated_at FROM companies ORDER BY name",
                (),
            )
            .await?;

        let mut companies = Vec::new();
        while let Some(row) = rows.next().await? {
            companies.push(row_to_company(&row)?);
        }
        Ok(companies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn create_company_roundtrip() {
        let svc = test_service().await;

        let company = svc
            .create_company("Acme Health", Some("Hospital network"))
            .await
            .unwrap();
        assert!(company.id > 0);

        let fetched = svc.get_company(company.id).await.unwrap();
        assert_eq!(fetched.name, "Acme Health");
        assert_eq!(fetched.industry.as_deref(), Some("Hospital network"));
    }

    #[tokio::test]
    async fn duplicate_company_name_rejected() {
        let svc = test_service().await;
        svc.create_company("Acme Health", None).await.unwrap();

        let result = svc.create_company("Acme Health", None).await;
        assert!(matches!(result, Err(DatabaseError::LibSql(_))));
    }

    #[tokio::test]
    async fn get_missing_company() {
        let svc = test_service().await;
        let result = svc.get_company(404).await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn list_companies_sorted_by_name() {
        let svc = test_service().await;
        svc.create_company("Northwind Clinics", None).await.unwrap();
        svc.create_company("Acme Health", None).await.unwrap();

        let names: Vec<String> = svc
            .list_companies()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Acme Health", "Northwind Clinics"]);
    }
}

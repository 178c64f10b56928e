//! # atrium-db
//!
//! libSQL storage for the Atrium research corpus.
//!
//! Holds companies, research projects, tags, metrics, and documents, and
//! exposes them through `ResearchService`, the research query gateway.
//! Filtered reads go through the `research_data_view` SQL view so every
//! result arrives denormalized in a single statement.
//!
//! `browser` carries the client-side view state (active filter, option lists,
//! results, loading flag) with latest-request-wins sequencing.

pub mod browser;
pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use atrium_config::DatabaseConfig;
use error::DatabaseError;
use libsql::Builder;

/// Database handle for the research corpus.
///
/// Owns one libSQL database and one connection. Callers create it once and
/// hand it to `ResearchService`; there is no process-wide instance.
pub struct ResearchDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ResearchDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Enables foreign keys and runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        Self::init(db, true).await
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        Self::init(db, true).await
    }

    /// Open the database described by configuration.
    ///
    /// Remote mode wins when both `url` and `auth_token` are set.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for an unusable configuration,
    /// or any error from opening the database.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        config
            .validate()
            .map_err(|e| DatabaseError::InvalidState(e.to_string()))?;

        let db = if config.is_remote() {
            tracing::debug!(url = %config.url, "opening remote research database");
            Builder::new_remote(config.url.clone(), config.auth_token.clone())
                .build()
                .await?
        } else {
            tracing::debug!(path = %config.path, "opening local research database");
            Builder::new_local(&config.path).build().await?
        };
        Self::init(db, config.foreign_keys).await
    }

    async fn init(db: libsql::Database, foreign_keys: bool) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        if foreign_keys {
            // Must be set per connection in SQLite
            conn.execute("PRAGMA foreign_keys = ON", ())
                .await
                .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;
        }

        let research_db = Self { db, conn };
        research_db.run_migrations().await?;
        Ok(research_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

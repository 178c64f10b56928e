//! The research query gateway.
//!
//! `ResearchService` wraps an injected `ResearchDb`. All repo methods are
//! implemented as `impl ResearchService` blocks under `repos/`.
//!
//! Every call is a direct pass-through to the store: no caching, no retry,
//! and store errors surface unchanged as `DatabaseError::LibSql`. The only
//! multi-statement unit of work is `create_project`, which runs inside one
//! transaction.

use atrium_config::DatabaseConfig;

use crate::ResearchDb;
use crate::error::DatabaseError;

pub struct ResearchService {
    db: ResearchDb,
}

impl ResearchService {
    /// Wrap an already-opened database.
    #[must_use]
    pub const fn new(db: ResearchDb) -> Self {
        Self { db }
    }

    /// Open a local database and wrap it.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self::new(ResearchDb::open_local(db_path).await?))
    }

    /// Open the database described by configuration and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the configuration is unusable or the
    /// database cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Ok(Self::new(ResearchDb::open(config).await?))
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ResearchDb {
        &self.db
    }
}

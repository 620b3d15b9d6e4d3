//! Service layer: repositories and engine operations over one database.
//!
//! `RegService` wraps `RegDb`. Repository methods (`repos/`) and enrollment
//! engine operations (`engine/`) are implemented as `impl RegService` blocks.

use crate::RegDb;
use crate::error::DatabaseError;

/// Entry point for every storage-backed Registrar operation.
///
/// Every operation takes the acting user or student explicitly; the service
/// keeps no notion of a current user.
pub struct RegService {
    db: RegDb,
}

impl RegService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = RegDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `RegDb`.
    #[must_use]
    pub const fn from_db(db: RegDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &RegDb {
        &self.db
    }
}

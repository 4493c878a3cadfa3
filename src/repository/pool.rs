//! SQLite connection factory.
//!
//! SQLite connections are cheap and file-based, so a new connection is
//! established per operation rather than pooled.

use std::path::Path;

use diesel::sqlite::SqliteConnection;
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::AsyncConnection;

use super::StoreError;

/// Diesel error type alias.
pub type DieselError = diesel::result::Error;

/// Async SQLite connection using SyncConnectionWrapper.
pub type AsyncSqliteConnection = SyncConnectionWrapper<SqliteConnection>;

/// Hands out connections to a single SQLite database file.
#[derive(Debug, Clone)]
pub struct AsyncSqlitePool {
    database_url: String,
}

impl AsyncSqlitePool {
    /// Create a pool for a database URL or path (an optional `sqlite:` prefix is stripped).
    pub fn new(database_url: &str) -> Self {
        let url = database_url.strip_prefix("sqlite:").unwrap_or(database_url);
        Self {
            database_url: url.to_string(),
        }
    }

    /// Create pool from a file path.
    pub fn from_path(db_path: &Path) -> Self {
        Self::new(&db_path.display().to_string())
    }

    /// Open a new connection.
    pub async fn get(&self) -> Result<AsyncSqliteConnection, StoreError> {
        Ok(AsyncSqliteConnection::establish(&self.database_url).await?)
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &Path {
        Path::new(&self.database_url)
    }
}

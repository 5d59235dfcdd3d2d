//! Repository traits for schema-described entity kinds.
//!
//! - `Persistence`: Point reads and batch write preparation for one entity kind
//! - `RepositoryConnection`: Database connection setup
//! - `ConnectionConfig`: How a backend connects

use async_trait::async_trait;

use crate::{Lookup, Record, SqlEntity, StorageError};

/// Connection configuration for database backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionConfig {
    /// Connect using a database URL string with the backend's default pool size.
    Url(String),
    /// Connect using a database URL string and an explicit pool size.
    Pool { url: String, max_connections: u32 },
}

impl ConnectionConfig {
    pub fn url(&self) -> &str {
        match self {
            ConnectionConfig::Url(url) => url,
            ConnectionConfig::Pool { url, .. } => url,
        }
    }

    /// The configured pool size, if one was given.
    pub fn max_connections(&self) -> Option<u32> {
        match self {
            ConnectionConfig::Url(_) => None,
            ConnectionConfig::Pool {
                max_connections, ..
            } => Some(*max_connections),
        }
    }
}

impl From<&str> for ConnectionConfig {
    fn from(url: &str) -> Self {
        ConnectionConfig::Url(url.to_string())
    }
}

impl From<String> for ConnectionConfig {
    fn from(url: String) -> Self {
        ConnectionConfig::Url(url)
    }
}

impl From<&String> for ConnectionConfig {
    fn from(url: &String) -> Self {
        ConnectionConfig::Url(url.clone())
    }
}

/// Trait for database connection setup.
#[async_trait]
pub trait RepositoryConnection: Sized + Send + Sync {
    /// Connect to the database using the provided configuration.
    async fn connect(config: impl Into<ConnectionConfig> + Send) -> Result<Self, StorageError>;
}

/// Reads and write preparation for one entity kind.
///
/// - `get`: Point lookup by id; failures surface as [`Lookup::Absent`]
/// - `prepare_batch_insert`: INSERT of every column, id first
/// - `prepare_batch_update`: UPDATE of every non-id column, keyed by id
///
/// Preparation performs no I/O and cannot fail. The returned entities are run
/// by [`QueryExecutor::execute_batch`](crate::QueryExecutor::execute_batch).
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Look up a record by id.
    ///
    /// A query or decode failure is logged and reported as `Absent`, so
    /// `Absent` means "not found or could not be read".
    async fn get(&self, id: &str) -> Lookup;

    fn prepare_batch_insert(&self, record: &Record) -> SqlEntity;

    fn prepare_batch_update(&self, record: &Record) -> SqlEntity;
}

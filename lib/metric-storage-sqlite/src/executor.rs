//! SQLite implementation of QueryExecutor.

/// Pool size used when the configuration does not name one.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 16;

use async_trait::async_trait;
use metric_storage::{
    ConnectionConfig, QueryExecutor, RepositoryConnection, Row, SqlEntity, StorageError, Value,
};
use sqlx::sqlite::SqlitePoolOptions;
use std::ops::Deref;
use tracing::debug;

use crate::{bind_values, extract_row};

/// Wrapper around sqlx::SqlitePool that implements QueryExecutor.
#[derive(Clone, Debug)]
pub struct SqlitePool(sqlx::SqlitePool);

impl SqlitePool {
    /// Create a new SqlitePool from an sqlx SqlitePool.
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self(pool)
    }

    /// Get the inner sqlx::SqlitePool.
    pub fn inner(&self) -> &sqlx::SqlitePool {
        &self.0
    }
}

impl Deref for SqlitePool {
    type Target = sqlx::SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl RepositoryConnection for SqlitePool {
    /// Connect to a SQLite database.
    ///
    /// Each connection to `sqlite::memory:` opens its own database; use
    /// `ConnectionConfig::Pool` with `max_connections: 1` to share one.
    async fn connect(config: impl Into<ConnectionConfig> + Send) -> Result<Self, StorageError> {
        let config = config.into();
        let max_connections = config
            .max_connections()
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(config.url())
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        debug!(url = config.url(), max_connections, "connected to sqlite");
        Ok(Self(pool))
    }
}

#[async_trait]
impl QueryExecutor for SqlitePool {
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, StorageError> {
        let args = bind_values(params)?;
        let rows = sqlx::query_with(sql, args)
            .fetch_all(&self.0)
            .await
            .map_err(|e| StorageError::Query(e.to_string()))?;

        rows.iter().map(extract_row).collect()
    }

    /// Run every entity inside one transaction; any failure rolls the whole
    /// batch back.
    async fn execute_batch(&self, entities: &[SqlEntity]) -> Result<u64, StorageError> {
        let mut tx = self
            .0
            .begin()
            .await
            .map_err(|e| StorageError::Query(e.to_string()))?;

        let mut affected = 0;
        for entity in entities {
            let args = bind_values(entity.params())?;
            let result = sqlx::query_with(entity.sql(), args)
                .execute(&mut *tx)
                .await
                .map_err(|e| StorageError::Query(e.to_string()))?;
            affected += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(|e| StorageError::Query(e.to_string()))?;
        debug!(statements = entities.len(), affected, "executed batch");
        Ok(affected)
    }
}

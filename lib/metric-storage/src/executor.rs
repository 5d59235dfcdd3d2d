use async_trait::async_trait;

use crate::{Row, SqlEntity, StorageError, Value};

/// Trait for executing generated SQL against a database backend.
///
/// Implemented by backend-specific pool types (e.g. the SQLite pool in
/// `metric-storage-sqlite`). SQL uses `?` positional placeholders.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run a query and return every result row.
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, StorageError>;

    /// Execute prepared entities in one round trip and return the number of
    /// rows affected.
    async fn execute_batch(&self, entities: &[SqlEntity]) -> Result<u64, StorageError>;
}

#[async_trait]
impl<E: QueryExecutor + ?Sized> QueryExecutor for std::sync::Arc<E> {
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, StorageError> {
        (**self).query(sql, params).await
    }

    async fn execute_batch(&self, entities: &[SqlEntity]) -> Result<u64, StorageError> {
        (**self).execute_batch(entities).await
    }
}

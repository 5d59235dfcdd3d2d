//! SQLite implementation for metric-storage.
//!
//! This crate provides a [`QueryExecutor`] over an sqlx SQLite pool. SQLite
//! takes `?` positional placeholders natively, so statements generated by
//! `metric-storage` run unchanged.
//!
//! # Usage
//!
//! ```text
//! use metric_storage::{Accessor, Persistence, tables::InstancePerformance};
//! use metric_storage_sqlite::{RepositoryConnection, SqlitePool};
//!
//! let pool = SqlitePool::connect("sqlite://metrics.db").await?;
//! let accessor = Accessor::for_kind::<InstancePerformance>(pool);
//!
//! let entity = accessor.prepare_batch_insert(&record);
//! accessor.executor().execute_batch(&[entity]).await?;
//! let found = accessor.get(record.id()).await;
//! ```

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::unwrap_in_result)
)]

mod bind;
mod executor;

pub use bind::{bind_values, extract_row};
pub use executor::{DEFAULT_MAX_CONNECTIONS, SqlitePool};

// Re-export core types for convenience
pub use metric_storage::{
    Accessor, ConnectionConfig, Lookup, Persistence, QueryExecutor, Record, RepositoryConnection,
    Row, SchemaDescriptor, SqlEntity, StorageError, Value,
};

//! Metric Storage - Schema-described records and SQL generation for metrics tables.
//!
//! This crate maps a positional, schema-typed [`Record`] to and from a relational
//! table without per-field reflection or per-table SQL.
//!
//! # Core Concepts
//!
//! - **Record**: An id plus ordered integer, long, and string slots.
//! - **Schema Descriptor**: Binds slot positions to column names for one entity
//!   kind. The descriptor's column order is the only contract between a record's
//!   positions and the table's columns.
//! - **SQL Entity**: An immutable `(sql, params)` pair ready for a batch executor.
//!
//! # Traits
//!
//! - [`QueryExecutor`]: The database client boundary (queries and batch execution)
//! - [`Persistence`]: Point reads and batch write preparation for one entity kind
//! - [`EntityKind`]: Concrete tables exposing their schema
//! - [`RepositoryConnection`]: Backend connection setup

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::unwrap_in_result)
)]

mod accessor;
mod entity;
mod error;
mod executor;
mod record;
mod repository;
mod row;
mod schema;
mod time_bucket;
mod value;

pub mod sql;
pub mod tables;

pub use accessor::{Accessor, Lookup};
pub use entity::SqlEntity;
pub use error::StorageError;
pub use executor::QueryExecutor;
pub use record::{Record, Slot};
pub use repository::{ConnectionConfig, Persistence, RepositoryConnection};
pub use row::Row;
pub use schema::{Column, EntityKind, SchemaBuilder, SchemaDescriptor};
pub use time_bucket::{TimeBucket, TimeUnit};
pub use value::Value;

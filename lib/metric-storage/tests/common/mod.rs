//! In-memory executor that interprets the generated statement shapes.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use metric_storage::{QueryExecutor, Row, SqlEntity, StorageError, Value};

#[derive(Default)]
pub struct MemoryExecutor {
    tables: Mutex<HashMap<String, Vec<Row>>>,
}

impl MemoryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self, table: &str) -> usize {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .map_or(0, Vec::len)
    }

    fn apply(&self, entity: &SqlEntity) -> Result<u64, StorageError> {
        let sql = entity.sql();
        let params = entity.params();
        let mut tables = self.tables.lock().unwrap();

        if let Some(rest) = sql.strip_prefix("insert into ") {
            let (table, rest) = split_once(rest, " (")?;
            let (columns, _) = split_once(rest, ") values (")?;
            let columns: Vec<&str> = columns.split(", ").collect();
            if columns.len() != params.len() {
                return Err(StorageError::Query("column/param count mismatch".into()));
            }
            let mut row = Row::new();
            for (column, value) in columns.iter().zip(params) {
                row.push(*column, value.clone());
            }
            tables.entry(table.to_string()).or_default().push(row);
            return Ok(1);
        }

        if let Some(rest) = sql.strip_prefix("update ") {
            let (table, rest) = split_once(rest, " set ")?;
            let (assignments, id_clause) = split_once(rest, " where ")?;
            let id_column = id_clause.trim_end_matches(" = ?");
            let columns: Vec<&str> = assignments
                .split(", ")
                .map(|a| a.trim_end_matches(" = ?"))
                .collect();
            let (id, values) = params
                .split_last()
                .ok_or_else(|| StorageError::Query("update without id".into()))?;

            let rows = tables.entry(table.to_string()).or_default();
            let mut affected = 0;
            for row in rows.iter_mut().filter(|r| r.get(id_column) == Some(id)) {
                let mut updated = Row::new();
                for name in row.columns() {
                    let value = match columns.iter().position(|c| *c == name) {
                        Some(i) => values[i].clone(),
                        None => row.get(name).cloned().unwrap(),
                    };
                    updated.push(name, value);
                }
                *row = updated;
                affected += 1;
            }
            return Ok(affected);
        }

        Err(StorageError::Query(format!("unsupported statement: {sql}")))
    }
}

fn split_once<'a>(s: &'a str, pat: &str) -> Result<(&'a str, &'a str), StorageError> {
    s.split_once(pat)
        .ok_or_else(|| StorageError::Query(format!("malformed statement near: {s}")))
}

#[async_trait]
impl QueryExecutor for MemoryExecutor {
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, StorageError> {
        let rest = sql
            .strip_prefix("select * from ")
            .ok_or_else(|| StorageError::Query(format!("unsupported query: {sql}")))?;
        let (table, id_clause) = split_once(rest, " where ")?;
        let id_column = id_clause.trim_end_matches(" = ?");
        let id = params
            .first()
            .ok_or_else(|| StorageError::Query("lookup without id".into()))?;

        let tables = self.tables.lock().unwrap();
        Ok(tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|r| r.get(id_column) == Some(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn execute_batch(&self, entities: &[SqlEntity]) -> Result<u64, StorageError> {
        let mut affected = 0;
        for entity in entities {
            affected += self.apply(entity)?;
        }
        Ok(affected)
    }
}

/// Executor whose every call fails, as a disconnected client would.
pub struct FailingExecutor;

#[async_trait]
impl QueryExecutor for FailingExecutor {
    async fn query(&self, _sql: &str, _params: &[Value]) -> Result<Vec<Row>, StorageError> {
        Err(StorageError::Connection("connection refused".into()))
    }

    async fn execute_batch(&self, _entities: &[SqlEntity]) -> Result<u64, StorageError> {
        Err(StorageError::Connection("connection refused".into()))
    }
}

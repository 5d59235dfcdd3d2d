use serde::Serialize;

use crate::{StorageError, Value};

/// Generated SQL text plus its positional parameters.
///
/// `params` lines up 1:1 with the `?` placeholders of `sql`, left to right.
/// Entities are self-contained; any number of them can be batched together in
/// any order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlEntity {
    sql: String,
    params: Vec<Value>,
}

impl SqlEntity {
    pub(crate) fn new(sql: String, params: Vec<Value>) -> Self {
        Self { sql, params }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// Render as `{"sql": ..., "params": [...]}` for diagnostics.
    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }
}

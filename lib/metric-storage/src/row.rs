//! Driver-neutral result rows.

use crate::{StorageError, Value};

/// One result row as ordered `(column, value)` pairs.
///
/// Lookups by name ignore ASCII case, since drivers differ in how they report
/// unquoted identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.push((column.into(), value.into()));
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn integer(&self, column: &str) -> Result<i32, StorageError> {
        match self.require(column)? {
            Value::Int(n) => Ok(*n),
            Value::Long(n) => i32::try_from(*n).map_err(|_| mismatch(column, "integer")),
            Value::String(_) => Err(mismatch(column, "integer")),
        }
    }

    pub fn long(&self, column: &str) -> Result<i64, StorageError> {
        match self.require(column)? {
            Value::Int(n) => Ok(i64::from(*n)),
            Value::Long(n) => Ok(*n),
            Value::String(_) => Err(mismatch(column, "bigint")),
        }
    }

    pub fn string(&self, column: &str) -> Result<String, StorageError> {
        match self.require(column)? {
            Value::String(s) => Ok(s.clone()),
            Value::Int(n) => Ok(n.to_string()),
            Value::Long(n) => Ok(n.to_string()),
        }
    }

    fn require(&self, column: &str) -> Result<&Value, StorageError> {
        self.get(column)
            .ok_or_else(|| StorageError::ColumnNotFound(column.to_string()))
    }
}

fn mismatch(column: &str, expected: &'static str) -> StorageError {
    StorageError::TypeMismatch {
        column: column.to_string(),
        expected,
    }
}

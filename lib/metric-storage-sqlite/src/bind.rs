//! Conversions between metric-storage values and sqlx SQLite arguments/rows.

use metric_storage::{Row, StorageError, Value};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Arguments, Column, Row as _, TypeInfo, ValueRef};

/// Bind values, in order, to SQLite positional arguments.
pub fn bind_values(params: &[Value]) -> Result<SqliteArguments<'static>, StorageError> {
    let mut args = SqliteArguments::default();
    for value in params {
        let added = match value {
            Value::Int(n) => args.add(*n),
            Value::Long(n) => args.add(*n),
            Value::String(s) => args.add(s.clone()),
        };
        added.map_err(|e| StorageError::Query(e.to_string()))?;
    }
    Ok(args)
}

/// Convert a SQLite row into a driver-neutral [`Row`].
///
/// NULL columns are left out, so reading them reports a missing column.
pub fn extract_row(row: &SqliteRow) -> Result<Row, StorageError> {
    let mut out = Row::new();

    for column in row.columns() {
        let idx = column.ordinal();
        let raw = row
            .try_get_raw(idx)
            .map_err(|e| StorageError::Query(e.to_string()))?;
        if raw.is_null() {
            continue;
        }
        // Storage class of this value, not the declared column type.
        let is_text = raw.type_info().name() == "TEXT";

        let integer = if is_text {
            None
        } else {
            row.try_get::<i64, _>(idx).ok()
        };
        let value = match integer {
            Some(n) => Value::Long(n),
            None => {
                let s: String = row.try_get(idx).map_err(|_| StorageError::TypeMismatch {
                    column: column.name().to_string(),
                    expected: "integer or text",
                })?;
                Value::String(s)
            }
        };
        out.push(column.name(), value);
    }

    Ok(out)
}

use thiserror::Error;

use crate::Slot;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Query error: {0}")]
    Query(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Type mismatch for column {column}: expected {expected}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
    },

    #[error("Type mismatch for slot {slot:?}: expected {expected}")]
    SlotMismatch { slot: Slot, expected: &'static str },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

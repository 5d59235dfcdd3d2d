//! Positional, schema-typed records.
//!
//! A `Record` carries no column names. Slot positions only gain meaning through
//! the [`SchemaDescriptor`](crate::SchemaDescriptor) of its entity kind.

use serde::{Deserialize, Serialize};

use crate::{StorageError, Value};

/// A typed position inside a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Integer(usize),
    Long(usize),
    String(usize),
}

/// One row of an entity kind: an identifier plus three ordered slot vectors.
///
/// Slot accessors index directly into the underlying vectors and panic when the
/// position is outside the record's shape, the same way slice indexing does.
/// A record shaped by [`SchemaDescriptor::build`](crate::SchemaDescriptor::build)
/// always fits its descriptor's columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: String,
    integers: Vec<i32>,
    longs: Vec<i64>,
    strings: Vec<String>,
}

impl Record {
    /// Create a record with zeroed integer/long slots and empty string slots.
    pub fn new(
        id: impl Into<String>,
        integer_count: usize,
        long_count: usize,
        string_count: usize,
    ) -> Self {
        Self {
            id: id.into(),
            integers: vec![0; integer_count],
            longs: vec![0; long_count],
            strings: vec![String::new(); string_count],
        }
    }

    /// Create a record from already-populated slot vectors.
    pub fn from_parts(
        id: impl Into<String>,
        integers: Vec<i32>,
        longs: Vec<i64>,
        strings: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            integers,
            longs,
            strings,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn integer(&self, position: usize) -> i32 {
        self.integers[position]
    }

    pub fn set_integer(&mut self, position: usize, value: i32) {
        self.integers[position] = value;
    }

    pub fn long(&self, position: usize) -> i64 {
        self.longs[position]
    }

    pub fn set_long(&mut self, position: usize, value: i64) {
        self.longs[position] = value;
    }

    pub fn string(&self, position: usize) -> &str {
        &self.strings[position]
    }

    pub fn set_string(&mut self, position: usize, value: impl Into<String>) {
        self.strings[position] = value.into();
    }

    pub fn integers(&self) -> &[i32] {
        &self.integers
    }

    pub fn longs(&self) -> &[i64] {
        &self.longs
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    /// Read a slot as a bindable value.
    pub fn value(&self, slot: Slot) -> Value {
        match slot {
            Slot::Integer(i) => Value::Int(self.integer(i)),
            Slot::Long(i) => Value::Long(self.long(i)),
            Slot::String(i) => Value::String(self.string(i).to_string()),
        }
    }

    /// Builder-style setter used when filling a record column by column.
    pub fn with(mut self, slot: Slot, value: impl Into<Value>) -> Result<Self, StorageError> {
        self.set(slot, value.into())?;
        Ok(self)
    }

    /// Write a value into a slot, widening or narrowing integers as needed.
    ///
    /// A long that does not fit an integer slot, or text written to a numeric
    /// slot, is rejected and leaves the slot unchanged.
    pub fn set(&mut self, slot: Slot, value: Value) -> Result<(), StorageError> {
        match (slot, value) {
            (Slot::Integer(i), Value::Int(n)) => self.set_integer(i, n),
            (Slot::Integer(i), Value::Long(n)) => {
                let n = i32::try_from(n).map_err(|_| mismatch(slot, "integer"))?;
                self.set_integer(i, n);
            }
            (Slot::Long(i), Value::Long(n)) => self.set_long(i, n),
            (Slot::Long(i), Value::Int(n)) => self.set_long(i, i64::from(n)),
            (Slot::String(i), Value::String(s)) => self.set_string(i, s),
            (Slot::String(i), Value::Int(n)) => self.set_string(i, n.to_string()),
            (Slot::String(i), Value::Long(n)) => self.set_string(i, n.to_string()),
            (Slot::Integer(_), Value::String(_)) => return Err(mismatch(slot, "integer")),
            (Slot::Long(_), Value::String(_)) => return Err(mismatch(slot, "bigint")),
        }
        Ok(())
    }
}

fn mismatch(slot: Slot, expected: &'static str) -> StorageError {
    StorageError::SlotMismatch { slot, expected }
}

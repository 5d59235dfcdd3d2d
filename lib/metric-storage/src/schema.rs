//! Schema descriptors for entity kinds.
//!
//! A descriptor binds a table, its id column, and an ordered list of columns to
//! record slots. Both the read path (row decoding) and the write path
//! (statement and parameter generation) walk the same `columns` list, so the
//! declaration order here is the one place positional meaning is defined.

use crate::{Record, Slot};

/// A non-id column bound to a record slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub slot: Slot,
}

impl Column {
    pub fn new(name: impl Into<String>, slot: Slot) -> Self {
        Self {
            name: name.into(),
            slot,
        }
    }
}

/// Table and slot layout for one entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescriptor {
    table: String,
    id_column: String,
    columns: Vec<Column>,
    integer_count: usize,
    long_count: usize,
    string_count: usize,
}

impl SchemaDescriptor {
    /// Start describing `table`, keyed by `id_column`.
    pub fn builder(table: impl Into<String>, id_column: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            table: table.into(),
            id_column: id_column.into(),
            columns: Vec::new(),
        }
    }

    /// Build a descriptor from an explicit column list.
    ///
    /// Slot counts per kind are the highest position used plus one.
    pub fn new(
        table: impl Into<String>,
        id_column: impl Into<String>,
        columns: Vec<Column>,
    ) -> Self {
        let count = |slot_index: fn(Slot) -> Option<usize>| {
            columns
                .iter()
                .filter_map(|c| slot_index(c.slot))
                .map(|i| i + 1)
                .max()
                .unwrap_or(0)
        };
        let integer_count = count(|s| match s {
            Slot::Integer(i) => Some(i),
            _ => None,
        });
        let long_count = count(|s| match s {
            Slot::Long(i) => Some(i),
            _ => None,
        });
        let string_count = count(|s| match s {
            Slot::String(i) => Some(i),
            _ => None,
        });

        Self {
            table: table.into(),
            id_column: id_column.into(),
            columns,
            integer_count,
            long_count,
            string_count,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    /// Non-id columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// All column names: id first, then declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        std::iter::once(self.id_column.as_str())
            .chain(self.columns.iter().map(|c| c.name.as_str()))
            .collect()
    }

    pub fn integer_columns(&self) -> Vec<&str> {
        self.names_where(|s| matches!(s, Slot::Integer(_)))
    }

    pub fn long_columns(&self) -> Vec<&str> {
        self.names_where(|s| matches!(s, Slot::Long(_)))
    }

    pub fn string_columns(&self) -> Vec<&str> {
        self.names_where(|s| matches!(s, Slot::String(_)))
    }

    pub fn integer_count(&self) -> usize {
        self.integer_count
    }

    pub fn long_count(&self) -> usize {
        self.long_count
    }

    pub fn string_count(&self) -> usize {
        self.string_count
    }

    /// An empty record for `id`, sized for this entity kind.
    pub fn build(&self, id: impl Into<String>) -> Record {
        Record::new(id, self.integer_count, self.long_count, self.string_count)
    }

    fn names_where(&self, pred: fn(&Slot) -> bool) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| pred(&c.slot))
            .map(|c| c.name.as_str())
            .collect()
    }
}

/// Incremental descriptor construction; each typed call takes the next free
/// slot of that kind.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    table: String,
    id_column: String,
    columns: Vec<Column>,
}

impl SchemaBuilder {
    pub fn integer(self, name: impl Into<String>) -> Self {
        let next = self.next(|s| matches!(s, Slot::Integer(_)));
        self.column(name, Slot::Integer(next))
    }

    pub fn long(self, name: impl Into<String>) -> Self {
        let next = self.next(|s| matches!(s, Slot::Long(_)));
        self.column(name, Slot::Long(next))
    }

    pub fn string(self, name: impl Into<String>) -> Self {
        let next = self.next(|s| matches!(s, Slot::String(_)));
        self.column(name, Slot::String(next))
    }

    /// Bind a column to an explicit slot.
    pub fn column(mut self, name: impl Into<String>, slot: Slot) -> Self {
        self.columns.push(Column::new(name, slot));
        self
    }

    pub fn build(self) -> SchemaDescriptor {
        SchemaDescriptor::new(self.table, self.id_column, self.columns)
    }

    fn next(&self, pred: fn(&Slot) -> bool) -> usize {
        self.columns.iter().filter(|c| pred(&c.slot)).count()
    }
}

/// A concrete entity kind (one metrics table).
pub trait EntityKind {
    fn schema() -> SchemaDescriptor;
}

//! Persistence accessor: translates between records and SQL entities for one
//! entity kind.

use async_trait::async_trait;
use tracing::{debug, error};

use crate::sql::{build_batch_insert, build_batch_update, build_point_lookup};
use crate::{
    EntityKind, Persistence, QueryExecutor, Record, Row, SchemaDescriptor, Slot, SqlEntity,
    StorageError, Value,
};

/// Result of a point lookup.
///
/// `Absent` covers both "no such row" and "the lookup failed"; failures are
/// logged where they happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Record),
    Absent,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_option(self) -> Option<Record> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::Absent => None,
        }
    }
}

impl From<Lookup> for Option<Record> {
    fn from(lookup: Lookup) -> Self {
        lookup.into_option()
    }
}

/// [`Persistence`] for the entity kind described by `schema`, executing reads
/// through `executor`.
///
/// Holds no mutable state; share it freely across tasks.
#[derive(Debug, Clone)]
pub struct Accessor<E> {
    executor: E,
    schema: SchemaDescriptor,
}

impl<E: QueryExecutor> Accessor<E> {
    pub fn new(executor: E, schema: SchemaDescriptor) -> Self {
        Self { executor, schema }
    }

    /// Accessor for a concrete entity kind.
    pub fn for_kind<K: EntityKind>(executor: E) -> Self {
        Self::new(executor, K::schema())
    }

    pub fn schema(&self) -> &SchemaDescriptor {
        &self.schema
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    async fn fetch(&self, id: &str) -> Result<Option<Record>, StorageError> {
        let sql = build_point_lookup(self.schema.table(), self.schema.id_column());
        let rows = self.executor.query(&sql, &[Value::from(id)]).await?;

        match rows.first() {
            Some(row) => self.decode(id, row).map(Some),
            None => Ok(None),
        }
    }

    fn decode(&self, id: &str, row: &Row) -> Result<Record, StorageError> {
        let mut record = self.schema.build(id);
        for column in self.schema.columns() {
            match column.slot {
                Slot::Integer(i) => record.set_integer(i, row.integer(&column.name)?),
                Slot::Long(i) => record.set_long(i, row.long(&column.name)?),
                Slot::String(i) => record.set_string(i, row.string(&column.name)?),
            }
        }
        Ok(record)
    }

    /// Walk the declared columns once, pairing each name with its value.
    fn column_values<'a>(&'a self, record: &Record) -> Vec<(&'a str, Value)> {
        self.schema
            .columns()
            .iter()
            .map(|column| (column.name.as_str(), record.value(column.slot)))
            .collect()
    }
}

#[async_trait]
impl<E: QueryExecutor> Persistence for Accessor<E> {
    async fn get(&self, id: &str) -> Lookup {
        match self.fetch(id).await {
            Ok(Some(record)) => Lookup::Found(record),
            Ok(None) => Lookup::Absent,
            Err(e) => {
                error!(table = self.schema.table(), id, error = %e, "point lookup failed");
                Lookup::Absent
            }
        }
    }

    fn prepare_batch_insert(&self, record: &Record) -> SqlEntity {
        let mut pairs = Vec::with_capacity(self.schema.columns().len() + 1);
        pairs.push((self.schema.id_column(), Value::from(record.id())));
        pairs.extend(self.column_values(record));

        let (columns, params): (Vec<&str>, Vec<Value>) = pairs.into_iter().unzip();
        let sql = build_batch_insert(self.schema.table(), &columns);
        debug!(table = self.schema.table(), id = record.id(), "prepared batch insert");
        SqlEntity::new(sql, params)
    }

    fn prepare_batch_update(&self, record: &Record) -> SqlEntity {
        let (columns, mut params): (Vec<&str>, Vec<Value>) =
            self.column_values(record).into_iter().unzip();
        let sql = build_batch_update(self.schema.table(), &columns, self.schema.id_column());
        params.push(Value::from(record.id()));
        debug!(table = self.schema.table(), id = record.id(), "prepared batch update");
        SqlEntity::new(sql, params)
    }
}

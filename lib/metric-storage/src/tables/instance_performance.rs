//! Per-instance call counts and cost per time bucket.

use crate::{EntityKind, Record, SchemaDescriptor, TimeBucket};

pub const TABLE: &str = "instance_performance";
pub const COLUMN_ID: &str = "id";
pub const COLUMN_APPLICATION_ID: &str = "application_id";
pub const COLUMN_INSTANCE_ID: &str = "instance_id";
pub const COLUMN_CALLS: &str = "calls";
pub const COLUMN_COST_TOTAL: &str = "cost_total";
pub const COLUMN_TIME_BUCKET: &str = "time_bucket";

/// Marker for the `instance_performance` table.
///
/// Integer slots: application id, instance id, calls.
/// Long slots: total cost, time bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstancePerformance;

impl EntityKind for InstancePerformance {
    fn schema() -> SchemaDescriptor {
        SchemaDescriptor::builder(TABLE, COLUMN_ID)
            .integer(COLUMN_APPLICATION_ID)
            .integer(COLUMN_INSTANCE_ID)
            .integer(COLUMN_CALLS)
            .long(COLUMN_COST_TOTAL)
            .long(COLUMN_TIME_BUCKET)
            .build()
    }
}

impl InstancePerformance {
    /// A populated record in this table's slot layout.
    pub fn record(
        id: impl Into<String>,
        application_id: i32,
        instance_id: i32,
        calls: i32,
        cost_total: i64,
        time_bucket: TimeBucket,
    ) -> Record {
        Record::from_parts(
            id,
            vec![application_id, instance_id, calls],
            vec![cost_total, time_bucket.value()],
            Vec::new(),
        )
    }
}

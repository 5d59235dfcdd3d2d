#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::sync::Arc;

use common::{FailingExecutor, MemoryExecutor};
use metric_storage::sql::placeholder_count;
use metric_storage::tables::InstancePerformance;
use metric_storage::tables::instance_performance::TABLE;
use metric_storage::{
    Accessor, Column, EntityKind, Lookup, Persistence, QueryExecutor, Record, SchemaDescriptor, Slot,
    TimeBucket, TimeUnit, Value,
};

fn sample() -> Record {
    let bucket = TimeBucket::from_value(201706011234, TimeUnit::Minute).unwrap();
    InstancePerformance::record("abc123", 1, 2, 10, 500, bucket)
}

#[test]
fn insert_matches_documented_shape() {
    let accessor = Accessor::for_kind::<InstancePerformance>(MemoryExecutor::new());
    let record = Record::from_parts("abc123", vec![1, 2, 10], vec![500, 9999], Vec::new());

    let entity = accessor.prepare_batch_insert(&record);

    assert_eq!(
        entity.sql(),
        "insert into instance_performance (id, application_id, instance_id, calls, cost_total, time_bucket) values (?,?,?,?,?,?)"
    );
    assert_eq!(
        entity.to_json().unwrap(),
        r#"{"sql":"insert into instance_performance (id, application_id, instance_id, calls, cost_total, time_bucket) values (?,?,?,?,?,?)","params":["abc123",1,2,10,500,9999]}"#
    );
}

#[test]
fn update_matches_documented_shape() {
    let accessor = Accessor::for_kind::<InstancePerformance>(MemoryExecutor::new());
    let record = Record::from_parts("abc123", vec![1, 2, 10], vec![500, 9999], Vec::new());

    let entity = accessor.prepare_batch_update(&record);

    assert_eq!(
        entity.sql(),
        "update instance_performance set application_id = ?, instance_id = ?, calls = ?, cost_total = ?, time_bucket = ? where id = ?"
    );
    assert_eq!(
        entity.params(),
        &[
            Value::Int(1),
            Value::Int(2),
            Value::Int(10),
            Value::Long(500),
            Value::Long(9999),
            Value::from("abc123"),
        ]
    );
}

#[test]
fn params_line_up_with_placeholders() {
    let schemas = [
        InstancePerformance::schema(),
        SchemaDescriptor::builder("single", "id").long("v").build(),
        SchemaDescriptor::builder("mixed", "key")
            .string("name")
            .integer("a")
            .long("b")
            .integer("c")
            .string("tag")
            .build(),
    ];

    for schema in schemas {
        let record = schema.build("r-1");
        let accessor = Accessor::new(MemoryExecutor::new(), schema);

        let insert = accessor.prepare_batch_insert(&record);
        assert_eq!(insert.params().len(), placeholder_count(insert.sql()));
        assert_eq!(insert.params().first(), Some(&Value::from("r-1")));

        let update = accessor.prepare_batch_update(&record);
        assert_eq!(update.params().len(), placeholder_count(update.sql()));
        assert_eq!(update.params().last(), Some(&Value::from("r-1")));
    }
}

#[test]
fn reversed_declaration_reverses_sql_and_params_together() {
    let forward_columns = vec![
        Column::new("application_id", Slot::Integer(0)),
        Column::new("instance_id", Slot::Integer(1)),
        Column::new("calls", Slot::Integer(2)),
        Column::new("cost_total", Slot::Long(0)),
        Column::new("time_bucket", Slot::Long(1)),
    ];
    let mut reversed_columns = forward_columns.clone();
    reversed_columns.reverse();

    let forward = Accessor::new(
        MemoryExecutor::new(),
        SchemaDescriptor::new(TABLE, "id", forward_columns),
    );
    let reversed = Accessor::new(
        MemoryExecutor::new(),
        SchemaDescriptor::new(TABLE, "id", reversed_columns),
    );
    let record = sample();

    let f = forward.prepare_batch_update(&record);
    let r = reversed.prepare_batch_update(&record);

    let (f_params, f_id) = f.params().split_at(f.params().len() - 1);
    let (r_params, r_id) = r.params().split_at(r.params().len() - 1);
    let mut r_params = r_params.to_vec();
    r_params.reverse();
    assert_eq!(f_params, r_params.as_slice());
    assert_eq!(f_id, r_id);

    assert_eq!(
        r.sql(),
        "update instance_performance set time_bucket = ?, cost_total = ?, calls = ?, instance_id = ?, application_id = ? where id = ?"
    );

    let fi = forward.prepare_batch_insert(&record);
    let ri = reversed.prepare_batch_insert(&record);
    assert_eq!(
        fi.sql(),
        "insert into instance_performance (id, application_id, instance_id, calls, cost_total, time_bucket) values (?,?,?,?,?,?)"
    );
    assert_eq!(
        ri.sql(),
        "insert into instance_performance (id, time_bucket, cost_total, calls, instance_id, application_id) values (?,?,?,?,?,?)"
    );
    assert_eq!(fi.params()[0], ri.params()[0]);
    let mut tail = ri.params()[1..].to_vec();
    tail.reverse();
    assert_eq!(&fi.params()[1..], tail.as_slice());
}

#[tokio::test]
async fn insert_then_get_round_trips() {
    let accessor = Accessor::for_kind::<InstancePerformance>(MemoryExecutor::new());
    let record = sample();

    let entity = accessor.prepare_batch_insert(&record);
    let affected = accessor.executor().execute_batch(&[entity]).await.unwrap();
    assert_eq!(affected, 1);

    assert_eq!(accessor.get("abc123").await, Lookup::Found(record));
}

#[tokio::test]
async fn update_then_get_reflects_new_values() {
    let accessor = Accessor::for_kind::<InstancePerformance>(MemoryExecutor::new());
    let mut record = sample();
    let insert = accessor.prepare_batch_insert(&record);

    record.set_integer(2, 11);
    record.set_long(0, 640);
    let update = accessor.prepare_batch_update(&record);

    accessor
        .executor()
        .execute_batch(&[insert, update])
        .await
        .unwrap();

    let stored = accessor.get("abc123").await.into_option().unwrap();
    assert_eq!(stored.integer(2), 11);
    assert_eq!(stored.long(0), 640);
    assert_eq!(stored, record);
}

#[tokio::test]
async fn entities_from_different_records_batch_independently() {
    let accessor = Accessor::for_kind::<InstancePerformance>(MemoryExecutor::new());
    let bucket = TimeBucket::from_value(201706011235, TimeUnit::Minute).unwrap();
    let records: Vec<Record> = (0..5)
        .map(|i| InstancePerformance::record(format!("inst-{i}"), 1, i, i * 3, 100, bucket))
        .collect();

    let mut entities: Vec<_> = records
        .iter()
        .map(|r| accessor.prepare_batch_insert(r))
        .collect();
    entities.reverse();
    accessor.executor().execute_batch(&entities).await.unwrap();

    assert_eq!(accessor.executor().row_count(TABLE), 5);
    for record in records {
        let id = record.id().to_string();
        assert_eq!(accessor.get(&id).await, Lookup::Found(record));
    }
}

#[tokio::test]
async fn get_on_empty_store_is_absent() {
    let accessor = Accessor::for_kind::<InstancePerformance>(MemoryExecutor::new());
    assert_eq!(accessor.get("nothing-here").await, Lookup::Absent);
}

#[tokio::test]
async fn get_with_failing_client_is_absent() {
    let accessor = Accessor::for_kind::<InstancePerformance>(FailingExecutor);
    assert_eq!(accessor.get("abc123").await, Lookup::Absent);
}

#[tokio::test]
async fn accessor_is_shareable_across_tasks() {
    let executor = Arc::new(MemoryExecutor::new());
    let accessor = Arc::new(Accessor::for_kind::<InstancePerformance>(executor.clone()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let accessor = accessor.clone();
            tokio::spawn(async move {
                let bucket = TimeBucket::from_value(201706011234, TimeUnit::Minute).unwrap();
                let record = InstancePerformance::record(format!("task-{i}"), i, i, i, 1, bucket);
                let entity = accessor.prepare_batch_insert(&record);
                accessor.executor().execute_batch(&[entity]).await.unwrap();
                accessor.get(record.id()).await
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_found());
    }
    assert_eq!(executor.row_count(TABLE), 4);
}

mod common;

use common::{fanclub_records, record, FANCLUB};
use ixmodel_core::{Indexes, InvalidRecordPolicy};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn builds_in_input_order() {
    let indexes = Indexes::from_raw(fanclub_records(), InvalidRecordPolicy::Abort).unwrap();
    let names: Vec<&str> = indexes.iter().map(|index| index.name()).collect();
    assert_eq!(names[0], "_id_");
    assert_eq!(names[8], "big-index");
    assert_eq!(indexes.len(), 9);
    assert!(indexes.rejected().is_empty());
}

#[test]
fn abort_stops_at_first_bad_record() {
    let mut records = fanclub_records();
    records.insert(
        3,
        record(json!({ "name": "badIndex", "key": { "foo": "someStrangeValue" } })),
    );

    let err = Indexes::from_raw(records, InvalidRecordPolicy::Abort).unwrap_err();
    assert!(err.root().is_invalid_field_value());
    assert!(err
        .to_string()
        .starts_with("index record #3 (name=badIndex): index types must be one of"));
}

#[test]
fn skip_keeps_the_good_records() {
    let mut records = fanclub_records();
    records.push(record(json!({ "name": "badIndex", "key": { "foo": "nope" } })));
    records.push(record(json!({ "key": { "a": 1 } })));

    let indexes = Indexes::from_raw(records, InvalidRecordPolicy::Skip).unwrap();
    assert_eq!(indexes.len(), 9);

    let rejected = indexes.rejected();
    assert_eq!(rejected.len(), 2);
    assert_eq!(rejected[0].position, 9);
    assert_eq!(rejected[0].name.as_deref(), Some("badIndex"));
    assert!(rejected[0].error.root().is_invalid_field_value());
    assert_eq!(rejected[1].position, 10);
    assert_eq!(rejected[1].name, None);
    assert!(rejected[1].error.root().is_invalid_record());
}

#[test]
fn from_json_array() {
    let value: serde_json::Value = serde_json::from_str(FANCLUB).unwrap();
    let indexes = Indexes::from_json(value, InvalidRecordPolicy::Abort).unwrap();
    assert_eq!(indexes.len(), 9);

    let err = Indexes::from_json(json!({ "name": "_id_" }), InvalidRecordPolicy::Skip).unwrap_err();
    assert_eq!(err.to_string(), "expected an array of index records");
}

#[test]
fn from_json_rejects_non_objects() {
    let value = json!([{ "v": 2, "name": "_id_", "key": { "_id": 1 } }, 42]);

    let indexes = Indexes::from_json(value.clone(), InvalidRecordPolicy::Skip).unwrap();
    assert_eq!(indexes.len(), 1);
    assert_eq!(indexes.rejected()[0].position, 1);

    let err = Indexes::from_json(value, InvalidRecordPolicy::Abort).unwrap_err();
    assert_eq!(
        err.to_string(),
        "index record #1: invalid index record: expected an object"
    );
}

#[test]
fn from_json_computes_relative_sizes_after_skipping() {
    let value = json!([
        { "v": 2, "name": "a_1", "key": { "a": 1 }, "size": 200 },
        "not an index",
        { "v": 2, "name": "b_1", "key": { "b": 1 }, "size": 50 },
    ]);

    let indexes = Indexes::from_json(value, InvalidRecordPolicy::Skip).unwrap();
    assert_eq!(indexes.rejected().len(), 1);
    assert_eq!(indexes.get("a_1").unwrap().relative_size(), Some(100.0));
    assert_eq!(indexes.get("b_1").unwrap().relative_size(), Some(25.0));
}

#[test]
fn relative_sizes() {
    let indexes = Indexes::from_raw(fanclub_records(), InvalidRecordPolicy::Abort).unwrap();

    assert_eq!(indexes.get("big-index").unwrap().relative_size(), Some(100.0));

    let seniors = indexes.get("seniors").unwrap().relative_size().unwrap();
    assert!((seniors - 425984.0 / 21483520.0 * 100.0).abs() < 1e-9);
}

#[test]
fn relative_size_needs_known_sizes() {
    let records = vec![
        record(json!({ "v": 2, "name": "a_1", "key": { "a": 1 } })),
        record(json!({ "v": 2, "name": "b_1", "key": { "b": 1 }, "size": 0 })),
    ];
    let indexes = Indexes::from_raw(records, InvalidRecordPolicy::Abort).unwrap();
    assert!(indexes.iter().all(|index| index.relative_size().is_none()));
}

#[test]
fn sorted_puts_id_first() {
    let records = vec![
        record(json!({ "v": 2, "ns": "b.c", "name": "x_1", "key": { "x": 1 } })),
        record(json!({ "v": 2, "ns": "a.c", "name": "z_1", "key": { "z": 1 } })),
        record(json!({ "v": 2, "ns": "a.c", "name": "_id_", "key": { "_id": 1 } })),
        record(json!({ "v": 2, "ns": "b.c", "name": "_id_", "key": { "_id": 1 } })),
        record(json!({ "v": 2, "ns": "a.c", "name": "$**_text", "key": { "_fts": "text", "_ftsx": 1 } })),
    ];
    let indexes = Indexes::from_raw(records, InvalidRecordPolicy::Abort).unwrap();

    let ids: Vec<String> = indexes.sorted().iter().map(|index| index.id()).collect();
    assert_eq!(
        ids,
        ["a.c._id_", "a.c.$**_text", "a.c.z_1", "b.c._id_", "b.c.x_1"]
    );
}

#[test]
fn serializes_one_record_per_index() {
    let indexes = Indexes::from_raw(fanclub_records(), InvalidRecordPolicy::Abort).unwrap();
    let records = indexes.serialize();
    assert_eq!(records.len(), 9);
    assert_eq!(
        serde_json::to_value(&indexes).unwrap(),
        serde_json::Value::Array(records.into_iter().map(serde_json::Value::Object).collect())
    );
}

// Shared by several test files; not every file uses every helper.
#![allow(dead_code)]

use ixmodel_core::{IndexModel, RawIndex};
use serde_json::Value;

pub const FANCLUB: &str = include_str!("../fixtures/fanclub.json");

pub fn fanclub_records() -> Vec<RawIndex> {
    let Value::Array(items) = serde_json::from_str(FANCLUB).unwrap() else {
        panic!("fixture must be an array");
    };
    items.into_iter().map(record).collect()
}

pub fn fanclub() -> Vec<IndexModel> {
    fanclub_records()
        .into_iter()
        .map(|record| IndexModel::from_raw(record).unwrap())
        .collect()
}

pub fn find<'a>(indexes: &'a [IndexModel], name: &str) -> &'a IndexModel {
    indexes
        .iter()
        .find(|index| index.name() == name)
        .unwrap_or_else(|| panic!("no index named {name}"))
}

pub fn record(value: Value) -> RawIndex {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

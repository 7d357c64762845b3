//! Typed extraction of the known descriptor attributes.

use super::{NormalizedIndex, INDEX_MODEL_PROPS};
use crate::{Error, IndexField, RawIndex, Result};
use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use serde_json::Value;

const DERIVED_PROPS: [&str; 16] = [
    "id",
    "unique",
    "sparse",
    "ttl",
    "hashed",
    "geo",
    "compound",
    "single",
    "partial",
    "text",
    "isCollation",
    "type",
    "cardinality",
    "properties",
    "fields",
    "warnings",
];

/// Builds a normalized index from already-partitioned attributes.
pub(super) fn normalize(mut known: RawIndex, extra: RawIndex) -> Result<NormalizedIndex> {
    let key = match known.shift_remove("key") {
        Some(Value::Object(key)) => key.into_iter().collect::<IndexMap<_, _>>(),
        Some(other) => {
            return Err(Error::invalid_record(format!(
                "`key` must be an object, got {}",
                json_kind(&other)
            )))
        }
        None => return Err(Error::invalid_record("missing `key`")),
    };

    let name = match known.shift_remove("name") {
        Some(Value::String(name)) => name,
        Some(other) => {
            return Err(Error::invalid_record(format!(
                "`name` must be a string, got {}",
                json_kind(&other)
            )))
        }
        None => return Err(Error::invalid_record("missing `name`")),
    };

    let fields = key
        .iter()
        .map(|(field, value)| IndexField::new(field.as_str(), value))
        .collect::<Result<Vec<_>>>()?;

    Ok(NormalizedIndex {
        ns: string(&mut known, "ns")?,
        size: unsigned(&mut known, "size")?,
        usage_count: integer(&mut known, "usageCount")?,
        usage_since: timestamp(&mut known, "usageSince")?,
        usage_host: string(&mut known, "usageHost")?,
        version: integer(&mut known, "version")?,
        key,
        name,
        extra,
        fields,
    })
}

/// Builds a normalized index from a record already in normalized shape:
/// `version` instead of `v`, options nested under `extra`.
pub(super) fn from_normalized_record(mut record: RawIndex) -> Result<NormalizedIndex> {
    let extra = match record.shift_remove("extra") {
        Some(Value::Object(extra)) => extra,
        None | Some(Value::Null) => RawIndex::new(),
        Some(other) => {
            return Err(Error::invalid_record(format!(
                "`extra` must be an object, got {}",
                json_kind(&other)
            )))
        }
    };

    // Derived attributes from a previous serialization are recomputed.
    for attr in DERIVED_PROPS {
        record.shift_remove(attr);
    }

    if let Some(attr) = record
        .keys()
        .find(|attr| !INDEX_MODEL_PROPS.contains(&attr.as_str()))
    {
        return Err(Error::invalid_record(format!(
            "unexpected attribute `{}` in a normalized record",
            attr
        )));
    }

    normalize(record, extra)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn string(record: &mut RawIndex, attr: &str) -> Result<Option<String>> {
    match record.shift_remove(attr) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(mismatch(attr, "a string", &other)),
    }
}

fn integer(record: &mut RawIndex, attr: &str) -> Result<Option<i64>> {
    match record.shift_remove(attr) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(n) => Ok(Some(n)),
            None => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(Some(f as i64)),
                _ => Err(mismatch(attr, "an integer", &Value::Number(n))),
            },
        },
        Some(other) => Err(mismatch(attr, "an integer", &other)),
    }
}

fn unsigned(record: &mut RawIndex, attr: &str) -> Result<Option<u64>> {
    match integer(record, attr)? {
        None => Ok(None),
        Some(n) if n >= 0 => Ok(Some(n as u64)),
        Some(n) => Err(mismatch(attr, "a non-negative number", &Value::from(n))),
    }
}

/// Accepts an RFC 3339 string, epoch milliseconds, or an extended-JSON
/// `{"$date": ...}` wrapper around either.
fn timestamp(record: &mut RawIndex, attr: &str) -> Result<Option<DateTime<Utc>>> {
    let Some(value) = record.shift_remove(attr) else {
        return Ok(None);
    };
    parse_timestamp(&value).map_err(|_| mismatch(attr, "a timestamp", &value))
}

fn parse_timestamp(value: &Value) -> core::result::Result<Option<DateTime<Utc>>, ()> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|since| Some(since.with_timezone(&Utc)))
            .map_err(|_| ()),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
            .map(Some)
            .ok_or(()),
        Value::Object(wrapper) if wrapper.len() == 1 => match wrapper.get("$date") {
            Some(Value::Object(inner)) => match inner.get("$numberLong") {
                Some(Value::String(millis)) => millis
                    .parse::<i64>()
                    .ok()
                    .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
                    .map(Some)
                    .ok_or(()),
                _ => Err(()),
            },
            Some(inner) => parse_timestamp(inner),
            None => Err(()),
        },
        _ => Err(()),
    }
}

fn mismatch(attr: &str, expected: &str, actual: &Value) -> Error {
    Error::invalid_record(format!(
        "`{}` must be {}, got {}",
        attr,
        expected,
        json_kind(actual)
    ))
}

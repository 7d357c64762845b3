use crate::{Error, Result};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// How a single field participates in an index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IndexType {
    /// `1`
    Ascending,

    /// `-1`
    Descending,

    /// `"2dsphere"`
    TwoDSphere,

    /// `"2d"`
    TwoD,

    /// `"geoHaystack"`
    GeoHaystack,

    /// `"text"`
    Text,

    /// `"hashed"`
    Hashed,
}

impl IndexType {
    /// Every legal marker, in the order they are reported in diagnostics.
    pub const ALL: [IndexType; 7] = [
        IndexType::Ascending,
        IndexType::Descending,
        IndexType::TwoDSphere,
        IndexType::TwoD,
        IndexType::GeoHaystack,
        IndexType::Text,
        IndexType::Hashed,
    ];

    /// Parses the marker found in a `key` entry.
    ///
    /// Directions are accepted in any numeric spelling equal to `1` or `-1`
    /// (servers report `1.0` for some indexes). String markers must match
    /// exactly.
    pub fn from_json(value: &Value) -> Option<IndexType> {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(n) if n == 1.0 => Some(IndexType::Ascending),
                Some(n) if n == -1.0 => Some(IndexType::Descending),
                _ => None,
            },
            Value::String(s) => match s.as_str() {
                "2dsphere" => Some(IndexType::TwoDSphere),
                "2d" => Some(IndexType::TwoD),
                "geoHaystack" => Some(IndexType::GeoHaystack),
                "text" => Some(IndexType::Text),
                "hashed" => Some(IndexType::Hashed),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns the marker in its canonical wire spelling.
    pub fn to_json(self) -> Value {
        match self {
            IndexType::Ascending => Value::from(1),
            IndexType::Descending => Value::from(-1),
            other => Value::from(other.as_str()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IndexType::Ascending => "1",
            IndexType::Descending => "-1",
            IndexType::TwoDSphere => "2dsphere",
            IndexType::TwoD => "2d",
            IndexType::GeoHaystack => "geoHaystack",
            IndexType::Text => "text",
            IndexType::Hashed => "hashed",
        }
    }

    pub fn is_geo(self) -> bool {
        matches!(
            self,
            IndexType::TwoDSphere | IndexType::TwoD | IndexType::GeoHaystack
        )
    }

    pub fn is_direction(self) -> bool {
        matches!(self, IndexType::Ascending | IndexType::Descending)
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for IndexType {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// One `(field, marker)` entry of an index key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexField {
    /// Key path, possibly dotted (`"address.city"`)
    field: String,

    /// Validated index marker
    value: IndexType,
}

impl IndexField {
    /// Validates `value` and builds the field.
    ///
    /// Fails with an invalid field value error when `value` is not a legal
    /// marker; the value is never coerced.
    pub fn new(field: impl Into<String>, value: &Value) -> Result<IndexField> {
        let field = field.into();
        let Some(value) = IndexType::from_json(value) else {
            return Err(Error::invalid_field_value(field, value.clone()));
        };
        Ok(IndexField { field, value })
    }

    pub fn from_type(field: impl Into<String>, value: IndexType) -> IndexField {
        IndexField {
            field: field.into(),
            value,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> IndexType {
        self.value
    }

    /// Returns `true` for `2dsphere`, `2d` and `geoHaystack` fields.
    pub fn is_geo(&self) -> bool {
        self.value.is_geo()
    }
}

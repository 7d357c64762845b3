mod attrs;
mod kind;

pub use kind::{Cardinality, IndexKind, IndexProperty};

use crate::{truthy::is_truthy, Error, IndexField, RawIndex, Result, Warning};
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Attributes modeled directly. Everything else a descriptor carries is an
/// index option and lands in `extra`.
pub const INDEX_MODEL_PROPS: [&str; 8] = [
    "ns",
    "key",
    "name",
    "size",
    "usageCount",
    "usageSince",
    "usageHost",
    "version",
];

/// Controls how [`IndexModel::new`] treats its input record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ModelOptions {
    /// When `true`, the record is a raw descriptor and is normalized first.
    /// When `false`, it must already be in normalized shape.
    pub parse: bool,
}

impl ModelOptions {
    pub const PARSE: ModelOptions = ModelOptions { parse: true };

    /// Top-level derived names (`unique`, `sparse`, `text`, `type`, ...) are
    /// dropped without error so serialized records reload; options belong in
    /// `extra`.
    pub const NORMALIZED: ModelOptions = ModelOptions { parse: false };
}

impl Default for ModelOptions {
    fn default() -> Self {
        ModelOptions::PARSE
    }
}

/// A descriptor after normalization, ready to become an [`IndexModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedIndex {
    pub ns: Option<String>,

    /// Field path to raw marker, in the order the server reported them
    pub key: IndexMap<String, Value>,

    pub name: String,

    /// Storage size in bytes
    pub size: Option<u64>,

    pub usage_count: Option<i64>,

    pub usage_since: Option<DateTime<Utc>>,

    pub usage_host: Option<String>,

    pub version: Option<i64>,

    /// Index options not covered by the attributes above
    pub extra: RawIndex,

    /// Validated view of `key`, one entry per key entry, same order.
    /// Rebuilt from `key` by [`IndexModel::from_normalized`].
    pub fields: Vec<IndexField>,
}

/// One index of a collection, with its derived classification.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexModel {
    ns: Option<String>,
    key: IndexMap<String, Value>,
    name: String,
    size: Option<u64>,
    usage_count: Option<i64>,
    usage_since: Option<DateTime<Utc>>,
    usage_host: Option<String>,
    version: Option<i64>,
    extra: RawIndex,
    fields: Vec<IndexField>,
    warnings: Vec<Warning>,

    /// Size as a percentage of the largest index in the same batch. Not
    /// serialized.
    relative_size: Option<f64>,
}

impl IndexModel {
    /// Builds a model from a record, normalizing it first when
    /// `options.parse` is set.
    pub fn new(record: RawIndex, options: ModelOptions) -> Result<IndexModel> {
        let normalized = if options.parse {
            IndexModel::parse(record)?
        } else {
            attrs::from_normalized_record(record)?
        };
        IndexModel::from_normalized(normalized)
    }

    /// Normalizes and builds a model from a raw descriptor.
    pub fn from_raw(record: RawIndex) -> Result<IndexModel> {
        IndexModel::new(record, ModelOptions::PARSE)
    }

    /// Parses a descriptor given as a JSON value.
    pub fn from_json(value: Value) -> Result<IndexModel> {
        match value {
            Value::Object(record) => IndexModel::from_raw(record),
            other => Err(Error::invalid_record(format!(
                "expected an object, got {}",
                attrs::json_kind(&other)
            ))),
        }
    }

    /// Builds a model from a normalized index.
    ///
    /// `key` is authoritative: `fields` is rebuilt from it and each marker
    /// validated again, so a hand-built `fields` that disagrees with `key` is
    /// discarded.
    pub fn from_normalized(normalized: NormalizedIndex) -> Result<IndexModel> {
        let NormalizedIndex {
            ns,
            key,
            name,
            size,
            usage_count,
            usage_since,
            usage_host,
            version,
            extra,
            fields: _,
        } = normalized;

        let fields = key
            .iter()
            .map(|(field, value)| IndexField::new(field.as_str(), value))
            .collect::<Result<Vec<_>>>()?;

        Ok(IndexModel {
            ns,
            key,
            name,
            size,
            usage_count,
            usage_since,
            usage_host,
            version,
            extra,
            fields,
            warnings: vec![],
            relative_size: None,
        })
    }

    /// Normalizes a raw descriptor.
    ///
    /// `v` is renamed to `version`, every attribute outside
    /// [`INDEX_MODEL_PROPS`] moves into `extra`, and `fields` is built from
    /// `key` in order. Any illegal marker in `key` fails the whole record.
    pub fn parse(mut record: RawIndex) -> Result<NormalizedIndex> {
        let version = record.shift_remove("v").unwrap_or(Value::Null);
        record.insert("version".to_string(), version);

        let mut known = RawIndex::new();
        let mut extra = RawIndex::new();

        for (attr, value) in record {
            if INDEX_MODEL_PROPS.contains(&attr.as_str()) {
                known.insert(attr, value);
            } else {
                extra.insert(attr, value);
            }
        }

        let normalized = attrs::normalize(known, extra)?;

        tracing::debug!(
            name = %normalized.name,
            fields = normalized.fields.len(),
            options = ?normalized.extra.keys().collect::<Vec<_>>(),
            "normalized index descriptor"
        );

        Ok(normalized)
    }

    pub fn ns(&self) -> Option<&str> {
        self.ns.as_deref()
    }

    pub fn key(&self) -> &IndexMap<String, Value> {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }

    pub fn usage_count(&self) -> Option<i64> {
        self.usage_count
    }

    pub fn usage_since(&self) -> Option<DateTime<Utc>> {
        self.usage_since
    }

    pub fn usage_host(&self) -> Option<&str> {
        self.usage_host.as_deref()
    }

    pub fn version(&self) -> Option<i64> {
        self.version
    }

    pub fn extra(&self) -> &RawIndex {
        &self.extra
    }

    pub fn fields(&self) -> &[IndexField] {
        &self.fields
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn add_warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn relative_size(&self) -> Option<f64> {
        self.relative_size
    }

    pub(crate) fn set_relative_size(&mut self, relative_size: Option<f64>) {
        self.relative_size = relative_size;
    }

    /// `<ns>.<name>`, or just the name when the namespace is unknown.
    pub fn id(&self) -> String {
        match &self.ns {
            Some(ns) => format!("{}.{}", ns, self.name),
            None => self.name.clone(),
        }
    }

    pub fn unique(&self) -> bool {
        self.name == "_id_" || is_truthy(self.extra.get("unique"))
    }

    pub fn sparse(&self) -> bool {
        is_truthy(self.extra.get("sparse"))
    }

    pub fn ttl(&self) -> bool {
        is_truthy(self.extra.get("expireAfterSeconds"))
    }

    pub fn hashed(&self) -> bool {
        self.key_has_marker("hashed")
    }

    /// 2dsphere indexes are recognized by their `2dsphereIndexVersion`
    /// option, `2d` and `geoHaystack` by their key markers.
    pub fn geo(&self) -> bool {
        is_truthy(self.extra.get("2dsphereIndexVersion"))
            || self.key_has_marker("2d")
            || self.key_has_marker("geoHaystack")
    }

    pub fn compound(&self) -> bool {
        self.key.len() > 1
    }

    pub fn single(&self) -> bool {
        !self.compound()
    }

    pub fn partial(&self) -> bool {
        is_truthy(self.extra.get("partialFilterExpression"))
    }

    pub fn text(&self) -> bool {
        is_truthy(self.extra.get("textIndexVersion"))
    }

    pub fn is_collation(&self) -> bool {
        is_truthy(self.extra.get("collation"))
    }

    /// Geo wins over hashed, hashed over text.
    pub fn index_type(&self) -> IndexKind {
        if self.geo() {
            IndexKind::Geospatial
        } else if self.hashed() {
            IndexKind::Hashed
        } else if self.text() {
            IndexKind::Text
        } else {
            IndexKind::Regular
        }
    }

    pub fn cardinality(&self) -> Cardinality {
        if self.single() {
            Cardinality::Single
        } else {
            Cardinality::Compound
        }
    }

    /// The properties that hold for this index, in priority order.
    pub fn properties(&self) -> Vec<IndexProperty> {
        let mut properties: Vec<_> = IndexProperty::ALL
            .into_iter()
            .filter(|property| self.has_property(*property))
            .collect();
        properties.sort_by_key(|property| property.priority());
        properties
    }

    pub fn has_property(&self, property: IndexProperty) -> bool {
        match property {
            IndexProperty::Unique => self.unique(),
            IndexProperty::Sparse => self.sparse(),
            IndexProperty::Partial => self.partial(),
            IndexProperty::Ttl => self.ttl(),
            IndexProperty::Collation => self.is_collation(),
        }
    }

    /// Flattens the model and its derived properties into one record.
    ///
    /// Every attribute is present; unknown values are `null`.
    pub fn serialize(&self) -> RawIndex {
        self.to_record()
    }

    fn to_record(&self) -> RawIndex {
        let mut out = RawIndex::new();

        out.insert("ns".into(), opt(self.ns.clone()));
        out.insert(
            "key".into(),
            Value::Object(
                self.key
                    .iter()
                    .map(|(field, value)| (field.clone(), value.clone()))
                    .collect(),
            ),
        );
        out.insert("name".into(), Value::from(self.name.clone()));
        out.insert("size".into(), opt(self.size));
        out.insert("usageCount".into(), opt(self.usage_count));
        out.insert(
            "usageSince".into(),
            opt(self
                .usage_since
                .map(|since| since.to_rfc3339_opts(SecondsFormat::Millis, true))),
        );
        out.insert("usageHost".into(), opt(self.usage_host.clone()));
        out.insert("version".into(), opt(self.version));
        out.insert("extra".into(), Value::Object(self.extra.clone()));

        out.insert("id".into(), Value::from(self.id()));
        out.insert("unique".into(), Value::from(self.unique()));
        out.insert("sparse".into(), Value::from(self.sparse()));
        out.insert("ttl".into(), Value::from(self.ttl()));
        out.insert("hashed".into(), Value::from(self.hashed()));
        out.insert("geo".into(), Value::from(self.geo()));
        out.insert("compound".into(), Value::from(self.compound()));
        out.insert("single".into(), Value::from(self.single()));
        out.insert("partial".into(), Value::from(self.partial()));
        out.insert("text".into(), Value::from(self.text()));
        out.insert("isCollation".into(), Value::from(self.is_collation()));
        out.insert("type".into(), Value::from(self.index_type().as_str()));
        out.insert("cardinality".into(), Value::from(self.cardinality().as_str()));
        out.insert(
            "properties".into(),
            Value::Array(
                self.properties()
                    .into_iter()
                    .map(|property| Value::from(property.as_str()))
                    .collect(),
            ),
        );

        out
    }

    fn key_has_marker(&self, marker: &str) -> bool {
        self.key.values().any(|value| *value == marker)
    }
}

impl Serialize for IndexModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl TryFrom<RawIndex> for IndexModel {
    type Error = Error;

    fn try_from(record: RawIndex) -> Result<IndexModel> {
        IndexModel::from_raw(record)
    }
}

fn opt<T: Into<Value>>(value: Option<T>) -> Value {
    value.map(Into::into).unwrap_or(Value::Null)
}

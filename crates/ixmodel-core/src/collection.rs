use crate::{Error, IndexModel, RawIndex, Result};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// What to do with a descriptor that cannot be modeled.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidRecordPolicy {
    /// Drop the record and keep going
    Skip,

    /// Fail the whole batch
    #[default]
    Abort,
}

/// A descriptor dropped under [`InvalidRecordPolicy::Skip`].
#[derive(Debug, Clone)]
pub struct Rejected {
    /// Zero-based position of the record in the input
    pub position: usize,

    pub name: Option<String>,

    pub error: Error,
}

/// The indexes of one or more collections, in input order.
#[derive(Debug, Clone, Default)]
pub struct Indexes {
    models: Vec<IndexModel>,
    rejected: Vec<Rejected>,
}

impl Indexes {
    /// Models every record, then computes relative sizes across the batch.
    pub fn from_raw(
        records: impl IntoIterator<Item = RawIndex>,
        policy: InvalidRecordPolicy,
    ) -> Result<Indexes> {
        Indexes::build(records.into_iter().map(Ok), policy)
    }

    /// Models a JSON array of descriptors.
    pub fn from_json(value: Value, policy: InvalidRecordPolicy) -> Result<Indexes> {
        let Value::Array(items) = value else {
            bail!("expected an array of index records");
        };

        let records = items.into_iter().map(|item| match item {
            Value::Object(record) => Ok(record),
            _ => Err(Error::invalid_record("expected an object")),
        });
        Indexes::build(records, policy)
    }

    pub fn models(&self) -> &[IndexModel] {
        &self.models
    }

    pub fn rejected(&self) -> &[Rejected] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexModel> {
        self.models.iter()
    }

    /// Finds an index by name. Names are only unique within a namespace, so
    /// this returns the first match.
    pub fn get(&self, name: &str) -> Option<&IndexModel> {
        self.models.iter().find(|model| model.name() == name)
    }

    /// Indexes ordered by namespace, then name, with `_id_` first within
    /// each namespace.
    pub fn sorted(&self) -> Vec<&IndexModel> {
        let mut sorted: Vec<_> = self.models.iter().collect();
        sorted.sort_by(|a, b| {
            a.ns()
                .cmp(&b.ns())
                .then_with(|| (b.name() == "_id_").cmp(&(a.name() == "_id_")))
                .then_with(|| a.name().cmp(b.name()))
        });
        sorted
    }

    pub fn serialize(&self) -> Vec<RawIndex> {
        self.models.iter().map(IndexModel::serialize).collect()
    }

    /// Entries that are already errors are rejected without a name.
    fn build(
        records: impl IntoIterator<Item = Result<RawIndex>>,
        policy: InvalidRecordPolicy,
    ) -> Result<Indexes> {
        let mut indexes = Indexes::default();

        for (position, record) in records.into_iter().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(error) => {
                    indexes.reject(position, None, error, policy)?;
                    continue;
                }
            };

            let name = record
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_owned);

            match IndexModel::from_raw(record) {
                Ok(model) => indexes.models.push(model),
                Err(error) => indexes.reject(position, name, error, policy)?,
            }
        }

        indexes.update_relative_sizes();
        Ok(indexes)
    }

    fn reject(
        &mut self,
        position: usize,
        name: Option<String>,
        error: Error,
        policy: InvalidRecordPolicy,
    ) -> Result<()> {
        let error = error.context(describe(position, name.as_deref()));
        match policy {
            InvalidRecordPolicy::Abort => Err(error),
            InvalidRecordPolicy::Skip => {
                tracing::warn!(position, name = ?name, %error, "skipping index record");
                self.rejected.push(Rejected {
                    position,
                    name,
                    error,
                });
                Ok(())
            }
        }
    }

    fn update_relative_sizes(&mut self) {
        let max = self.models.iter().filter_map(IndexModel::size).max();

        for model in &mut self.models {
            let relative = match (model.size(), max) {
                (Some(size), Some(max)) if max > 0 => Some(size as f64 / max as f64 * 100.0),
                _ => None,
            };
            model.set_relative_size(relative);
        }
    }
}

impl Serialize for Indexes {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.models.iter())
    }
}

impl<'a> IntoIterator for &'a Indexes {
    type Item = &'a IndexModel;
    type IntoIter = std::slice::Iter<'a, IndexModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

impl IntoIterator for Indexes {
    type Item = IndexModel;
    type IntoIter = std::vec::IntoIter<IndexModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.into_iter()
    }
}

fn describe(position: usize, name: Option<&str>) -> Error {
    match name {
        Some(name) => err!("index record #{} (name={})", position, name),
        None => err!("index record #{}", position),
    }
}

//! Merging of index statistics into raw descriptors.
//!
//! Sizes come from the collection stats' `indexSizes` map and usage from the
//! `$indexStats` aggregation stage. Both are matched to descriptors by index
//! name.

use crate::RawIndex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the `$indexStats` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexUsage {
    pub name: String,

    /// `host:port` of the server that reported the usage
    #[serde(default)]
    pub host: Option<String>,

    pub accesses: Accesses,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accesses {
    /// Number of operations that used the index
    #[serde(default)]
    pub ops: i64,

    /// When counting started, in any spelling `usageSince` accepts
    #[serde(default)]
    pub since: Value,
}

/// Sets `size`, `usageCount`, `usageSince` and `usageHost` on every
/// descriptor that has matching statistics.
///
/// Descriptors without statistics are returned untouched. `key` order is
/// never modified.
pub fn attach_stats(
    descriptors: Vec<RawIndex>,
    sizes: &RawIndex,
    usage: &[IndexUsage],
) -> Vec<RawIndex> {
    descriptors
        .into_iter()
        .map(|mut descriptor| {
            let Some(name) = descriptor
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_owned)
            else {
                return descriptor;
            };

            if let Some(size) = sizes.get(&name) {
                descriptor.insert("size".into(), size.clone());
            }

            if let Some(usage) = usage.iter().find(|usage| usage.name == name) {
                descriptor.insert("usageCount".into(), Value::from(usage.accesses.ops));
                descriptor.insert("usageSince".into(), usage.accesses.since.clone());
                if let Some(host) = &usage.host {
                    descriptor.insert("usageHost".into(), Value::from(host.clone()));
                }
            } else {
                tracing::trace!(index = %name, "no usage statistics for index");
            }

            descriptor
        })
        .collect()
}

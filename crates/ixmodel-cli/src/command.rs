mod classify;
mod summary;

pub use classify::ClassifyCommand;
pub use summary::SummaryCommand;

use crate::Config;
use anyhow::Result;
use ixmodel_core::Indexes;
use serde_json::Value;

/// Models the descriptors using the configured invalid-record policy.
fn load(config: &Config, descriptors: Value) -> Result<Indexes> {
    let indexes = Indexes::from_json(descriptors, config.batch.on_invalid)?;
    tracing::debug!(
        modeled = indexes.len(),
        rejected = indexes.rejected().len(),
        "loaded index descriptors"
    );
    Ok(indexes)
}

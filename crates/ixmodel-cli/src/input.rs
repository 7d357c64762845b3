use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Reads descriptors from a file, or stdin when `path` is `-`.
pub(crate) fn read(path: &Path) -> Result<Value> {
    let contents = if path == Path::new("-") {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .context("failed to read descriptors from stdin")?;
        contents
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    parse(&contents)
}

/// Accepts a JSON array of descriptors, or a stream of JSON objects (one
/// per line, as shell exports produce them).
pub(crate) fn parse(contents: &str) -> Result<Value> {
    let mut values = serde_json::Deserializer::from_str(contents)
        .into_iter::<Value>()
        .collect::<serde_json::Result<Vec<_>>>()
        .context("descriptors are not valid JSON")?;

    if values.len() == 1 && values[0].is_array() {
        return Ok(values.remove(0));
    }
    Ok(Value::Array(values))
}

use anyhow::Result;
use ixmodel_core::InvalidRecordPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Configuration for ixmodel CLI operations
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Batch processing configuration
    pub batch: BatchConfig,

    /// Output formatting configuration
    pub output: OutputConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// What to do with descriptors that cannot be modeled
    pub on_invalid: InvalidRecordPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Config {
    /// File loaded when no `--config` is given, if it exists
    pub const DEFAULT_PATH: &'static str = "ixmodel.toml";

    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the invalid record policy
    pub fn on_invalid(mut self, policy: InvalidRecordPolicy) -> Self {
        self.batch.on_invalid = policy;
        self
    }

    /// Enable or disable pretty-printed JSON output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.output.pretty = pretty;
        self
    }

    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        contents.parse()
    }

    /// Loads the configuration file, or returns the defaults if it does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if std::fs::exists(&path)? {
            return Self::load(path);
        }
        Ok(Self::default())
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toml_str = toml::to_string_pretty(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", toml_str)
    }
}

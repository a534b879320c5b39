//! Serializable ring configuration.

use crate::error::Result;
use crate::hash::HashKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ring settings as they appear in a JSON config file.
///
/// ```json
/// { "replicas": 160, "hash": "xxh3", "nodes": ["10.0.0.1", "10.0.0.2"] }
/// ```
///
/// Every field is optional. `replicas: 0` means the library default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Virtual nodes per node; 0 means `DEFAULT_REPLICAS`.
    pub replicas: usize,
    /// Hash used for placement and lookup.
    pub hash: HashKind,
    /// Nodes placed when the ring is built.
    pub nodes: Vec<String>,
}

impl RingConfig {
    /// Parses a config from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

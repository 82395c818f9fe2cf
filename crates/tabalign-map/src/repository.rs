//! Persistence for mapping files.
//!
//! Suggested mappings are written as pretty JSON so a reviewer can edit the
//! `source_column` entries by hand and feed the file back into the projector.
//! The stored form wraps the mapping with a saved-at timestamp and a format
//! version; both are optional on the way back in, so a hand-written file
//! containing only `entries` still loads.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tabalign_model::ColumnMapping;

const MAPPING_FORMAT_VERSION: &str = "1.0";

/// A [`ColumnMapping`] plus file-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMapping {
    #[serde(flatten)]
    pub mapping: ColumnMapping,
    /// When this mapping was saved (ISO 8601, UTC).
    #[serde(default)]
    pub saved_at: Option<String>,
    /// Free-form reviewer notes.
    #[serde(default)]
    pub description: Option<String>,
    /// Version of the mapping file format.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    MAPPING_FORMAT_VERSION.to_string()
}

impl StoredMapping {
    pub fn new(mapping: ColumnMapping) -> Self {
        Self {
            mapping,
            saved_at: Some(timestamp()),
            description: None,
            version: default_version(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Current UTC timestamp in an ISO 8601-like format, without pulling in a
/// date-time dependency.
fn timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!(
        "{}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        1970 + secs / 31536000,
        (secs % 31536000) / 2592000 + 1,
        (secs % 2592000) / 86400 + 1,
        (secs % 86400) / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Write a mapping to `path` as pretty JSON.
pub fn save_mapping(path: &Path, mapping: &ColumnMapping) -> Result<()> {
    let stored = StoredMapping::new(mapping.clone());
    let json = serde_json::to_string_pretty(&stored)
        .context("serialize mapping")?;
    fs::write(path, json).with_context(|| format!("write mapping to {}", path.display()))?;
    Ok(())
}

/// Load a mapping from a JSON file written by [`save_mapping`] or edited by
/// hand.
pub fn load_mapping(path: &Path) -> Result<ColumnMapping> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("read mapping from {}", path.display()))?;
    let stored: StoredMapping = serde_json::from_str(&json)
        .with_context(|| format!("parse mapping json: {}", path.display()))?;
    Ok(stored.mapping)
}

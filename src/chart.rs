//! Candidate chart descriptor.

use serde::Deserialize;
use serde_yaml::Value;

use crate::document::expect_mapping;
use crate::domain::ChartVersion;
use crate::error::{ChartCheckError, Result};

/// Fields of a chart descriptor this tool cares about.
///
/// Every other key (`apiVersion`, `dependencies`, ...) is ignored.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ChartDocument {
    #[serde(default)]
    pub version: Option<String>,
}

impl ChartDocument {
    pub fn from_value(value: &Value) -> Result<Self> {
        expect_mapping(value, "chart")?;
        serde_yaml::from_value(value.clone())
            .map_err(|e| ChartCheckError::schema(format!("Malformed chart yaml: {}", e)))
    }

    /// Returns the declared `version` as a semantic version.
    pub fn version(&self) -> Result<ChartVersion> {
        let raw = self
            .version
            .as_deref()
            .ok_or_else(|| ChartCheckError::schema("Malformed chart yaml (version not found)"))?;
        ChartVersion::parse(raw)
    }
}

/// Extracts the candidate version from a loaded chart document.
pub fn extract_version(value: &Value) -> Result<ChartVersion> {
    ChartDocument::from_value(value)?.version()
}

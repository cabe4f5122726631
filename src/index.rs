//! Package index descriptor and latest-version resolution.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::document::expect_mapping;
use crate::domain::ChartVersion;
use crate::error::{ChartCheckError, Result};

const MALFORMED_INDEX: &str = "Malformed index yaml";
const VERSION_NOT_FOUND: &str = "Malformed index yaml (version not found)";

/// A package index: published records keyed by entry name.
///
/// Entries stay as raw YAML until one is looked up, so a malformed record
/// or a non-string key under an unrelated entry does not fail the check.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexDocument {
    pub entries: Mapping,
}

/// A single published record of an entry.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IndexRecord {
    #[serde(default)]
    pub version: Option<String>,
}

impl IndexDocument {
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = expect_mapping(value, "index")?;
        let entries = root
            .get("entries")
            .ok_or_else(|| ChartCheckError::schema(MALFORMED_INDEX))?;
        let entries = entries.as_mapping().ok_or_else(|| {
            ChartCheckError::schema(format!("{} (entries is not a mapping)", MALFORMED_INDEX))
        })?;

        Ok(IndexDocument {
            entries: entries.clone(),
        })
    }

    /// Returns the records published under `app_name`.
    pub fn records(&self, app_name: &str) -> Result<Vec<IndexRecord>> {
        let raw = self.entries.get(app_name).ok_or_else(|| {
            ChartCheckError::not_found(format!("App {} not found on index", app_name))
        })?;

        let records: Vec<IndexRecord> = serde_yaml::from_value(raw.clone()).map_err(|e| {
            ChartCheckError::schema(format!("{} (entry '{}': {})", MALFORMED_INDEX, app_name, e))
        })?;

        if records.is_empty() {
            return Err(ChartCheckError::schema(VERSION_NOT_FOUND));
        }
        if records.iter().any(|record| record.version.is_none()) {
            return Err(ChartCheckError::schema(VERSION_NOT_FOUND));
        }

        Ok(records)
    }

    /// Returns every published version of `app_name`, in index order.
    pub fn versions(&self, app_name: &str) -> Result<Vec<ChartVersion>> {
        self.records(app_name)?
            .iter()
            .filter_map(|record| record.version.as_deref())
            .map(ChartVersion::parse)
            .collect()
    }

    /// Returns the highest published version of `app_name`.
    pub fn latest(&self, app_name: &str) -> Result<ChartVersion> {
        let versions = self.versions(app_name)?;
        debug!(app = app_name, count = versions.len(), "resolved published versions");
        max_version(versions)
    }
}

/// Returns the greatest version by semantic-version precedence.
pub fn max_version(versions: Vec<ChartVersion>) -> Result<ChartVersion> {
    versions
        .into_iter()
        .max()
        .ok_or_else(|| ChartCheckError::schema(VERSION_NOT_FOUND))
}

/// Resolves the latest published version of `app_name` from a loaded index.
pub fn latest_version(app_name: &str, index: &Value) -> Result<ChartVersion> {
    IndexDocument::from_value(index)?.latest(app_name)
}

//! Loading of YAML descriptor files.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::{ChartCheckError, Result};

/// Reads a YAML document from disk.
///
/// # Arguments
/// * `path` - Path of the chart or index descriptor
///
/// # Returns
/// * `Ok(Value)` - The parsed document
/// * `Err(File)` - If the file is missing or unreadable
/// * `Err(Parse)` - If the content is not valid YAML
pub fn load_document(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let origin = path.display().to_string();

    let text = fs::read_to_string(path).map_err(|e| ChartCheckError::file(&origin, e))?;
    debug!(path = %origin, bytes = text.len(), "read document");

    parse_document(&text, &origin)
}

/// Parses YAML text; `origin` only labels error messages.
pub fn parse_document(text: &str, origin: &str) -> Result<Value> {
    serde_yaml::from_str(text).map_err(|e| ChartCheckError::parse(origin, e.to_string()))
}

/// Returns the top-level mapping of a document.
///
/// An empty document parses as null and is rejected here too.
pub fn expect_mapping<'a>(value: &'a Value, what: &str) -> Result<&'a Mapping> {
    value
        .as_mapping()
        .ok_or_else(|| ChartCheckError::schema(format!("Malformed {} yaml (expected a mapping)", what)))
}

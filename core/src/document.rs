#![deny(missing_docs)]

//! # Document I/O
//!
//! Loading source documents and serializing the consolidated result. YAML
//! in, YAML out; the format itself is delegated to `serde_yaml`.

use crate::error::AppResult;
use crate::model::ConsolidatedSpec;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads and parses one source document.
///
/// Fails with `AppError::Io` when the file cannot be read and
/// `AppError::Yaml` when it is not valid YAML. The top-level shape is not
/// validated here; each area is type-checked at its use site.
pub fn load_source(path: &Path) -> AppResult<Value> {
    let raw = fs::read_to_string(path)?;
    let doc: Value = serde_yaml::from_str(&raw)?;
    Ok(doc)
}

/// Serializes the consolidated document to YAML (two-space indentation).
pub fn to_yaml(spec: &ConsolidatedSpec) -> AppResult<String> {
    Ok(serde_yaml::to_string(spec)?)
}

/// Writes the consolidated document to `path`, overwriting any existing
/// file. Called once per run, after all merging has completed, so a failed
/// run never leaves partial output behind.
pub fn write_document(path: &Path, spec: &ConsolidatedSpec) -> AppResult<()> {
    fs::write(path, to_yaml(spec)?)?;
    Ok(())
}

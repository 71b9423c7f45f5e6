use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::DocumentError;

/// Reads and parses a JSON document. No structural validation is applied.
pub fn read_json_document(path: &Path) -> Result<Value, DocumentError> {
    let raw = fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&raw).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

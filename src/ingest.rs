use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{FollowbackError, Result};
use crate::extract::extract;
use crate::model::{Extraction, Role};

/// Read and parse an export file.
pub fn load_export(path: &Path) -> Result<Value> {
    if !path.is_file() {
        return Err(FollowbackError::MissingInputFile(path.to_path_buf()));
    }
    let content = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = content.len(), "read export");
    serde_json::from_slice(&content).map_err(|source| FollowbackError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an export file and extract the usernames for `role`.
pub fn ingest(path: &Path, role: Role) -> Result<Extraction> {
    let raw = load_export(path)?;
    extract(&raw, role)
}

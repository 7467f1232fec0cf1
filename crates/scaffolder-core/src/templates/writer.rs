//! Writing template blobs into the project tree

use crate::error::{Result, ScaffoldError};
use std::path::Path;
use tokio::fs;

/// Write `contents` to `path`, creating missing parent directories
///
/// Existing files are overwritten. Contents are written verbatim.
pub async fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }

    fs::write(path, contents)
        .await
        .map_err(|e| ScaffoldError::io(path, e))
}

/// Create `path` and all of its ancestors; no-op if it already exists
pub async fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| ScaffoldError::io(path, e))
}

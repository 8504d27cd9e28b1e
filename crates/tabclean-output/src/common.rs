//! Shared file writing.

use std::fs;
use std::path::Path;

use crate::error::{OutputError, Result};

/// Write a fully rendered output in one call, creating parent directories.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    let write_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, contents).map_err(write_error)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

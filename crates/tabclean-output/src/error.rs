//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering or writing outputs.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The CSV writer failed while buffering records.
    #[error("failed to render CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Rendering to memory failed.
    #[error("failed to buffer output: {0}")]
    Buffer(#[source] std::io::Error),

    /// Failed to create the output directory or write the file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

//! Error types for delimited-file ingestion.

use std::path::PathBuf;
use thiserror::Error;

use crate::detect::CandidateScores;

/// Errors that can occur while sampling, detecting or reading a file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Content Errors ===
    /// File has no usable content (no lines, or a header without data rows).
    #[error("no data rows in {path}")]
    EmptyInput { path: PathBuf },

    /// No candidate delimiter splits the sampled lines.
    #[error("could not detect a delimiter; the file may not be delimited ({scores})")]
    NoDelimiterFound { scores: CandidateScores },

    /// The best candidate is not consistent enough to be trusted.
    #[error("delimiter is ambiguous; no candidate is clearly dominant ({scores})")]
    AmbiguousFormat { scores: CandidateScores },

    /// A data row has a different number of cells than the header.
    #[error("line {line} of {path} has {found} fields, expected {expected}")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    // === CSV Parsing Errors ===
    /// The csv reader rejected the file.
    #[error("failed to parse {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl IngestError {
    /// Maps an I/O error on `path`, keeping not-found distinct.
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/data.txt"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/data.txt");
    }

    #[test]
    fn test_malformed_row_names_line() {
        let err = IngestError::MalformedRow {
            path: PathBuf::from("data.tsv"),
            line: 7,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "line 7 of data.tsv has 3 fields, expected 4");
    }

    #[test]
    fn test_from_io_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::from_io(std::path::Path::new("x"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let io = std::io::Error::other("disk");
        let err = IngestError::from_io(std::path::Path::new("x"), io);
        assert!(matches!(err, IngestError::FileRead { .. }));
    }
}

//! Delimited-file ingestion.
//!
//! This crate reads delimited text files and works out how they are split.
//!
//! # Features
//!
//! - **Sampling**: Read the first N non-blank lines of a file
//! - **Detection**: Score tab, comma, pipe and semicolon by field-count consistency
//! - **Structure analysis**: Summarize header width and row consistency for a delimiter
//! - **Table reading**: Load header and data rows with line numbers, rejecting ragged rows
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabclean_ingest::{detect_delimiter, read_raw_table};
//! use tabclean_model::DetectOptions;
//!
//! let path = Path::new("metrics.txt");
//! let report = detect_delimiter(path, &DetectOptions::default())?;
//! let table = read_raw_table(path, report.delimiter)?;
//! println!("{} columns, {} rows", table.width(), table.rows.len());
//! ```

mod detect;
mod error;
mod reader;
mod sample;
mod structure;

// === Error Types ===
pub use error::{IngestError, Result};

// === Detection ===
pub use detect::{
    CandidateScore, CandidateScores, DetectionReport, detect_delimiter, detect_from_sample,
    score_candidate,
};

// === Sampling ===
pub use sample::{Sample, read_sample};

// === Structure ===
pub use structure::{HEADER_PREVIEW_LIMIT, StructureAnalysis, analyze_structure};

// === Table Reading ===
pub use reader::{RawRow, RawTable, parse_raw_table, read_raw_table};

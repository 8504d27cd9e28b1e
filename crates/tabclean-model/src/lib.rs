//! Core domain types for tabclean.
//!
//! Shared by the ingest, transform and output crates:
//!
//! - [`Delimiter`]: the field separator of a delimited text file
//! - [`CleanedCell`] and [`Table`]: cleaned values with normalized columns
//! - [`ColumnType`] and [`ColumnProfile`]: per-column inference results
//! - [`DetectOptions`] and [`CleanOptions`]: immutable run configuration

mod column;
mod delimiter;
mod error;
mod options;
mod table;

pub use column::{ColumnProfile, ColumnType};
pub use delimiter::Delimiter;
pub use error::{ModelError, Result};
pub use options::{
    CleanOptions, DEFAULT_MIN_CONSISTENCY, DEFAULT_NULL_MARKERS, DEFAULT_SAMPLE_LINES,
    DetectOptions, NumericSuffix, SuffixKind,
};
pub use table::{CleanedCell, Column, Table};

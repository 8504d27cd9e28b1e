//! Cleaning and typing of delimited data.
//!
//! Turns raw header and row strings into a [`Table`](tabclean_model::Table)
//! ready for CSV and SQL output.
//!
//! # Overview
//!
//! This crate provides:
//! - **Cell cleaning**: trim, map NULL markers, strip numeric suffixes (`20.8x`, `29%`)
//! - **Header normalization**: lowercase, underscore-separated, unique SQL identifiers
//! - **Type inference**: INTEGER, DECIMAL or TEXT per column, with observed widths
//!
//! # Example
//!
//! ```ignore
//! use tabclean_model::CleanOptions;
//! use tabclean_transform::{clean_table, infer_column_profiles};
//!
//! let headers = vec!["Company".to_string(), "ARR Multiple".to_string()];
//! let rows = vec![vec!["Acme".to_string(), "20.8x".to_string()]];
//! let cleaned = clean_table(&headers, &rows, &CleanOptions::default())?;
//! let profiles = infer_column_profiles(&cleaned.table);
//! ```
//!
//! # Design Principles
//!
//! - **Best effort**: a cell that looks numeric but does not parse stays text
//! - **Stateless functions**: options are passed in, nothing is global

mod clean;
mod error;
mod inference;

pub mod normalization;

pub use clean::{
    CellOutcome, CleanStats, CleanedTable, clean_cell, clean_cell_with_outcome, clean_table,
};
pub use error::TransformError;
pub use inference::{infer_column_profile, infer_column_profiles};
pub use normalization::header::{
    DEFAULT_TABLE_NAME, normalize_header, normalize_headers, normalize_identifier,
    normalize_table_name,
};

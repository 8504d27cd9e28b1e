//! Cell and table cleaning.

use serde::Serialize;
use tabclean_model::{CleanOptions, CleanedCell, Column, Table};

use crate::error::TransformError;
use crate::normalization::header::normalize_headers;
use crate::normalization::numeric::strip_numeric_suffix;

/// Which cleaning rule produced a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOutcome {
    /// Matched a NULL marker.
    Null,
    /// Numeric suffix stripped and the number normalized.
    Converted,
    /// Had a numeric suffix but the rest was not a number; kept as text.
    SuffixFallback,
    /// Kept as the trimmed string.
    Kept,
}

/// Counts of cleaning outcomes across a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    pub null_cells: usize,
    pub converted_cells: usize,
    pub fallback_cells: usize,
    pub kept_cells: usize,
}

impl CleanStats {
    fn record(&mut self, outcome: CellOutcome) {
        match outcome {
            CellOutcome::Null => self.null_cells += 1,
            CellOutcome::Converted => self.converted_cells += 1,
            CellOutcome::SuffixFallback => self.fallback_cells += 1,
            CellOutcome::Kept => self.kept_cells += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.null_cells + self.converted_cells + self.fallback_cells + self.kept_cells
    }
}

/// A cleaned table plus the outcome counts that produced it.
#[derive(Debug, Clone)]
pub struct CleanedTable {
    pub table: Table,
    pub stats: CleanStats,
}

/// Clean a single raw cell, reporting which rule applied.
///
/// Rules, first match wins: NULL marker, numeric suffix, trimmed text.
pub fn clean_cell_with_outcome(raw: &str, options: &CleanOptions) -> (CleanedCell, CellOutcome) {
    let trimmed = raw.trim();
    if options.is_null_marker(trimmed) {
        return (CleanedCell::Null, CellOutcome::Null);
    }
    if options.suffix_for(trimmed).is_some() {
        return match strip_numeric_suffix(trimmed, options) {
            Some(number) => (CleanedCell::Value(number), CellOutcome::Converted),
            None => (CleanedCell::value(trimmed), CellOutcome::SuffixFallback),
        };
    }
    (CleanedCell::value(trimmed), CellOutcome::Kept)
}

/// Clean a single raw cell.
pub fn clean_cell(raw: &str, options: &CleanOptions) -> CleanedCell {
    clean_cell_with_outcome(raw, options).0
}

/// Normalize headers and clean every row.
///
/// Rows must already be as wide as `headers`; a ragged row surfaces as
/// [`TransformError::Table`].
pub fn clean_table<I, R>(
    headers: &[String],
    rows: I,
    options: &CleanOptions,
) -> Result<CleanedTable, TransformError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let names = normalize_headers(headers);
    let columns: Vec<Column> = headers
        .iter()
        .zip(names)
        .map(|(source, name)| Column::new(source.trim(), name))
        .collect();

    let mut stats = CleanStats::default();
    let cleaned_rows: Vec<Vec<CleanedCell>> = rows
        .into_iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|raw| {
                    let (cell, outcome) = clean_cell_with_outcome(raw, options);
                    stats.record(outcome);
                    cell
                })
                .collect()
        })
        .collect();

    tracing::debug!(
        columns = columns.len(),
        rows = cleaned_rows.len(),
        null_cells = stats.null_cells,
        converted_cells = stats.converted_cells,
        fallback_cells = stats.fallback_cells,
        "cleaned table"
    );

    let table = Table::try_new(columns, cleaned_rows)?;
    Ok(CleanedTable { table, stats })
}

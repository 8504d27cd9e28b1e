//! Header and data row reading for a known delimiter.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tabclean_model::Delimiter;

use crate::error::{IngestError, Result};

/// A data row as read, tagged with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub line: u64,
    pub cells: Vec<String>,
}

/// Header plus data rows, all rows as wide as the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

/// Reads a delimited file into a [`RawTable`].
///
/// The first non-blank record is the header. Rows whose cells are all blank
/// are skipped. Fails with [`IngestError::MalformedRow`] on the first row
/// whose width differs from the header and with [`IngestError::EmptyInput`]
/// when no data rows remain.
pub fn read_raw_table(path: &Path, delimiter: Delimiter) -> Result<RawTable> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let table = parse_raw_table(file, delimiter, path)?;
    tracing::debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.rows.len(),
        "read raw table"
    );
    Ok(table)
}

/// Parses delimited text from any reader; `path` is used for error messages.
pub fn parse_raw_table<R: Read>(input: R, delimiter: Delimiter, path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let line = record
            .position()
            .map_or(idx as u64 + 1, csv::Position::line);

        let Some(header) = headers.as_ref() else {
            let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
            if let Some(first) = cells.first_mut() {
                *first = first.trim_start_matches('\u{feff}').to_string();
            }
            headers = Some(cells);
            continue;
        };

        if record.len() != header.len() {
            return Err(IngestError::MalformedRow {
                path: path.to_path_buf(),
                line,
                expected: header.len(),
                found: record.len(),
            });
        }
        rows.push(RawRow {
            line,
            cells: record.iter().map(str::to_string).collect(),
        });
    }

    match headers {
        Some(headers) if !rows.is_empty() => Ok(RawTable { headers, rows }),
        _ => Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        }),
    }
}

//! Header and row-width summary for a known delimiter.

use serde::Serialize;
use tabclean_model::Delimiter;

use crate::sample::Sample;

/// Header names shown before truncating with `...`.
pub const HEADER_PREVIEW_LIMIT: usize = 5;

/// Shape of the sampled lines under one delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureAnalysis {
    pub column_count: usize,
    pub headers: Vec<String>,
    /// True when every sampled data row matches the header width.
    pub consistent_columns: bool,
    pub sample_rows: usize,
    /// Field count of each sampled data row.
    pub column_counts: Vec<usize>,
}

impl StructureAnalysis {
    /// Header names for display, truncated to [`HEADER_PREVIEW_LIMIT`].
    pub fn header_preview(&self) -> String {
        let shown: Vec<&str> = self
            .headers
            .iter()
            .take(HEADER_PREVIEW_LIMIT)
            .map(String::as_str)
            .collect();
        let mut preview = shown.join(", ");
        if self.headers.len() > HEADER_PREVIEW_LIMIT {
            preview.push_str("...");
        }
        preview
    }
}

/// Treats the first sampled line as the header and checks the rest against it.
///
/// Returns `None` for an empty sample.
pub fn analyze_structure(sample: &Sample, delimiter: Delimiter) -> Option<StructureAnalysis> {
    let separator = delimiter.as_char();
    let (header_line, data_lines) = sample.lines.split_first()?;

    let headers: Vec<String> = header_line
        .split(separator)
        .map(|h| h.trim().to_string())
        .collect();
    let column_count = headers.len();
    let column_counts: Vec<usize> = data_lines
        .iter()
        .map(|line| line.split(separator).count())
        .collect();
    let consistent_columns = column_counts.iter().all(|&count| count == column_count);

    Some(StructureAnalysis {
        column_count,
        headers,
        consistent_columns,
        sample_rows: data_lines.len(),
        column_counts,
    })
}

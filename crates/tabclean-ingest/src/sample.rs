//! Reading leading lines for detection.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{IngestError, Result};

/// Leading non-blank lines of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Lines without terminators; the UTF-8 BOM is removed from the first.
    pub lines: Vec<String>,
    /// Number of lines that were asked for.
    pub requested: usize,
}

impl Sample {
    /// Builds a sample from in-memory text, applying the same rules as
    /// [`read_sample`].
    pub fn from_text(text: &str, requested: usize) -> Self {
        let mut lines = Vec::new();
        push_lines(text, requested.max(1), &mut lines);
        Self {
            lines,
            requested: requested.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True when the file ran out before the requested count was reached.
    pub fn is_short(&self) -> bool {
        self.lines.len() < self.requested
    }
}

/// Reads up to `requested` non-blank lines from the start of a file.
///
/// `\n`, `\r\n` and bare `\r` all end a line. Lines containing only spaces
/// are skipped.
pub fn read_sample(path: &Path, requested: usize) -> Result<Sample> {
    let requested = requested.max(1);
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::with_capacity(requested);

    for line_result in reader.lines() {
        let line = line_result.map_err(|e| IngestError::from_io(path, e))?;
        if push_lines(&line, requested, &mut lines) {
            break;
        }
    }

    if lines.is_empty() {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    if lines.len() < requested {
        tracing::debug!(
            path = %path.display(),
            sampled = lines.len(),
            requested,
            "file shorter than requested sample"
        );
    }

    Ok(Sample { lines, requested })
}

/// Appends the lines of `chunk` until `limit` is reached. Returns true once full.
fn push_lines(chunk: &str, limit: usize, lines: &mut Vec<String>) -> bool {
    for piece in chunk.split(['\n', '\r']) {
        if lines.len() >= limit {
            return true;
        }
        let piece = if lines.is_empty() {
            piece.strip_prefix('\u{feff}').unwrap_or(piece)
        } else {
            piece
        };
        if is_blank(piece) {
            continue;
        }
        lines.push(piece.to_string());
    }
    lines.len() >= limit
}

/// Matches the reader, which drops all-whitespace records.
fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

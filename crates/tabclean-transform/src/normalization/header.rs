//! Header normalization into SQL identifiers.

use std::collections::HashSet;

/// Table name used when none can be derived from user input.
pub const DEFAULT_TABLE_NAME: &str = "cleaned_data";

/// Lowercase `raw` and join its ASCII alphanumeric runs with single
/// underscores. Returns None when nothing alphanumeric remains.
pub fn normalize_identifier(raw: &str) -> Option<String> {
    let mut name = String::with_capacity(raw.len());
    let mut pending_separator = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !name.is_empty() {
                name.push('_');
            }
            pending_separator = false;
            name.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    if name.is_empty() {
        return None;
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert_str(0, "col_");
    }
    Some(name)
}

/// Normalize one header.
///
/// `position` is the 1-based column position, used to name headers with no
/// alphanumeric characters (`col_3`).
pub fn normalize_header(raw: &str, position: usize) -> String {
    normalize_identifier(raw).unwrap_or_else(|| format!("col_{position}"))
}

/// Normalize a header row, appending `_2`, `_3`, ... to names already taken.
pub fn normalize_headers<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut names = Vec::with_capacity(raw.len());

    for (idx, header) in raw.iter().enumerate() {
        let base = normalize_header(header.as_ref(), idx + 1);
        let mut name = base.clone();
        let mut counter = 2;
        while seen.contains(&name) {
            name = format!("{base}_{counter}");
            counter += 1;
        }
        if name != base {
            tracing::debug!(header = header.as_ref(), name = %name, "renamed duplicate column");
        }
        seen.insert(name.clone());
        names.push(name);
    }

    names
}

/// Normalize a table name, falling back to [`DEFAULT_TABLE_NAME`].
pub fn normalize_table_name(raw: &str) -> String {
    normalize_identifier(raw).unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string())
}

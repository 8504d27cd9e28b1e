//! Cleaned tables.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{ModelError, Result};

/// A cell after cleaning: either a value or NULL.
///
/// NULL is its own variant and never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CleanedCell {
    Null,
    Value(String),
}

impl CleanedCell {
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the value, or `None` for NULL.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Null => None,
            Self::Value(value) => Some(value),
        }
    }
}

/// A table column: the header as read plus its normalized name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub source: String,
    pub name: String,
}

impl Column {
    pub fn new(source: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
        }
    }
}

/// Cleaned rows under uniquely named columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<CleanedCell>>,
}

impl Table {
    /// Builds a table, checking that column names are unique and that every
    /// row has exactly one cell per column.
    pub fn try_new(columns: Vec<Column>, rows: Vec<Vec<CleanedCell>>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(ModelError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }
        }
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(ModelError::RowWidth {
                    row: idx + 1,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn rows(&self) -> &[Vec<CleanedCell>] {
        &self.rows
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates the cells of one column, top to bottom.
    pub fn column_cells(&self, index: usize) -> impl Iterator<Item = &CleanedCell> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }
}

//! Column type inference results.

use std::fmt;

use serde::Serialize;

/// SQL-facing type inferred for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Decimal,
    Text,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Decimal => "DECIMAL",
            Self::Text => "TEXT",
        }
    }

    /// True for types whose values are emitted as bare SQL numeric literals.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Decimal)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observed statistics for one column of a cleaned table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnProfile {
    /// Normalized column name.
    pub name: String,
    pub column_type: ColumnType,
    /// Number of NULL cells.
    pub null_count: usize,
    /// Longest non-NULL value, in characters.
    pub max_length: usize,
    /// Most digits seen before the decimal point (numeric columns only).
    pub max_integer_digits: usize,
    /// Most digits seen after the decimal point (numeric columns only).
    pub max_fraction_digits: usize,
}

impl ColumnProfile {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            null_count: 0,
            max_length: 0,
            max_integer_digits: 0,
            max_fraction_digits: 0,
        }
    }
}

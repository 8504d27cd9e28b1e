//! Error types for model construction.

use thiserror::Error;

/// Errors raised when building model values from user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A user-supplied delimiter could not be used.
    #[error("invalid delimiter {value:?}: {reason}")]
    InvalidDelimiter { value: String, reason: &'static str },

    /// A row does not have one cell per column.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Two columns share the same normalized name.
    #[error("duplicate column name '{name}'")]
    DuplicateColumn { name: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::RowWidth {
            row: 3,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "row 3 has 3 cells, expected 4");
    }
}

//! Column type inference from cleaned values.
//!
//! Priority order (first that fits every non-NULL value):
//! 1. INTEGER: whole numbers that fit in 64 bits
//! 2. DECIMAL: finite decimal literals
//! 3. TEXT: anything else, including columns with no values at all

use tabclean_model::{CleanedCell, ColumnProfile, ColumnType, Table};

use crate::normalization::numeric::{digit_counts, is_decimal, is_integer};

/// Profile every column of a table, in column order.
pub fn infer_column_profiles(table: &Table) -> Vec<ColumnProfile> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, column)| infer_column_profile(&column.name, table.column_cells(idx)))
        .collect()
}

/// Profile one column from its cells.
pub fn infer_column_profile<'a, I>(name: &str, cells: I) -> ColumnProfile
where
    I: IntoIterator<Item = &'a CleanedCell>,
{
    let mut null_count = 0;
    let mut values: Vec<&str> = Vec::new();
    for cell in cells {
        match cell.as_str() {
            Some(value) => values.push(value),
            None => null_count += 1,
        }
    }

    let column_type = infer_type(&values);
    let mut profile = ColumnProfile::new(name, column_type);
    profile.null_count = null_count;
    profile.max_length = values.iter().map(|v| v.chars().count()).max().unwrap_or(0);

    if column_type.is_numeric() {
        for value in &values {
            let (integer_digits, fraction_digits) = digit_counts(value);
            profile.max_integer_digits = profile.max_integer_digits.max(integer_digits);
            profile.max_fraction_digits = profile.max_fraction_digits.max(fraction_digits);
        }
    }

    tracing::trace!(
        column = name,
        column_type = %profile.column_type,
        nulls = null_count,
        "inferred column type"
    );
    profile
}

fn infer_type(values: &[&str]) -> ColumnType {
    if values.is_empty() {
        return ColumnType::Text;
    }
    if values.iter().all(|v| is_integer(v)) {
        return ColumnType::Integer;
    }
    if values.iter().all(|v| is_decimal(v)) {
        return ColumnType::Decimal;
    }
    ColumnType::Text
}

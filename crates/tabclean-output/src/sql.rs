//! SQL script generation.
//!
//! A script holds one `CREATE TABLE` statement followed by one `INSERT`
//! statement per row. Column types come from the inferred
//! [`ColumnProfile`]s and are spelled per [`SqlDialect`].

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tabclean_model::{CleanedCell, ColumnProfile, ColumnType, Table};

use crate::common::write_output;
use crate::error::Result;

/// Integers with more digits than this are declared as BIGINT.
const MAX_INTEGER_DIGITS: usize = 9;

/// Widest precision portable across ANSI engines; wider decimals are declared
/// as DOUBLE PRECISION.
const MAX_DECIMAL_PRECISION: usize = 38;

/// Words that must be quoted when used as identifiers. Sorted for binary search.
const RESERVED_WORDS: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CAST", "CHECK",
    "COLUMN", "CONSTRAINT", "CREATE", "CROSS", "CURRENT", "DATE", "DEFAULT", "DELETE", "DESC",
    "DISTINCT", "DROP", "ELSE", "END", "EXCEPT", "EXISTS", "FALSE", "FETCH", "FOR", "FOREIGN",
    "FROM", "FULL", "GRANT", "GROUP", "HAVING", "IN", "INDEX", "INNER", "INSERT", "INTERSECT",
    "INTO", "IS", "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "NATURAL", "NOT", "NULL", "OFFSET",
    "ON", "OR", "ORDER", "OUTER", "PRIMARY", "REFERENCES", "RIGHT", "SELECT", "SET", "TABLE",
    "THEN", "TIME", "TIMESTAMP", "TO", "TRUE", "UNION", "UNIQUE", "UPDATE", "USER", "USING",
    "VALUES", "WHEN", "WHERE", "WITH",
];

/// SQL flavour used for column type names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    #[default]
    Ansi,
    Postgres,
    Sqlite,
}

impl SqlDialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ansi => "ansi",
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for SQL rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlOptions {
    /// Already-normalized table name.
    pub table_name: String,
    pub dialect: SqlDialect,
}

impl SqlOptions {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            dialect: SqlDialect::default(),
        }
    }

    pub fn with_dialect(mut self, dialect: SqlDialect) -> Self {
        self.dialect = dialect;
        self
    }
}

/// Column type declaration for one profiled column.
pub fn column_definition(profile: &ColumnProfile, dialect: SqlDialect) -> String {
    match (profile.column_type, dialect) {
        (ColumnType::Integer, SqlDialect::Sqlite) => "INTEGER".to_string(),
        (ColumnType::Integer, _) if profile.max_integer_digits > MAX_INTEGER_DIGITS => {
            "BIGINT".to_string()
        }
        (ColumnType::Integer, _) => "INTEGER".to_string(),
        (ColumnType::Decimal, SqlDialect::Ansi) => {
            let scale = profile.max_fraction_digits;
            let precision = (profile.max_integer_digits + scale).max(1);
            if precision > MAX_DECIMAL_PRECISION {
                "DOUBLE PRECISION".to_string()
            } else {
                format!("DECIMAL({precision}, {scale})")
            }
        }
        (ColumnType::Decimal, SqlDialect::Postgres) => "NUMERIC".to_string(),
        (ColumnType::Decimal, SqlDialect::Sqlite) => "REAL".to_string(),
        (ColumnType::Text, SqlDialect::Ansi) => format!("VARCHAR({})", profile.max_length.max(1)),
        (ColumnType::Text, _) => "TEXT".to_string(),
    }
}

/// Double-quote an identifier if it is a reserved word.
pub fn quote_identifier(name: &str) -> String {
    let upper = name.to_ascii_uppercase();
    if RESERVED_WORDS.binary_search(&upper.as_str()).is_ok() {
        format!("\"{}\"", name.replace('"', "\"\""))
    } else {
        name.to_string()
    }
}

/// Single-quoted string literal with embedded quotes doubled.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Numeric cells are emitted as bare literals so the engine parses them as
/// exact numbers. Cleaning has already reduced them to plain digits.
fn render_value(cell: &CleanedCell, column_type: ColumnType) -> String {
    match cell.as_str() {
        None => "NULL".to_string(),
        Some(value) if column_type.is_numeric() => value.to_string(),
        Some(value) => quote_literal(value),
    }
}

/// Render the full SQL script for a table.
///
/// `profiles` must be in column order, as produced by type inference.
pub fn render_sql(table: &Table, profiles: &[ColumnProfile], options: &SqlOptions) -> String {
    let table_name = quote_identifier(&options.table_name);
    let column_names: Vec<String> = table
        .column_names()
        .into_iter()
        .map(quote_identifier)
        .collect();
    let column_types: Vec<ColumnType> = (0..table.width())
        .map(|idx| profiles.get(idx).map_or(ColumnType::Text, |p| p.column_type))
        .collect();

    let mut script = format!("CREATE TABLE {table_name} (\n");
    for (idx, name) in column_names.iter().enumerate() {
        let definition = match profiles.get(idx) {
            Some(profile) => column_definition(profile, options.dialect),
            None => {
                let fallback = ColumnProfile::new(name.as_str(), ColumnType::Text);
                column_definition(&fallback, options.dialect)
            }
        };
        let separator = if idx + 1 < column_names.len() { "," } else { "" };
        script.push_str(&format!("    {name} {definition}{separator}\n"));
    }
    script.push_str(");\n");

    if !table.is_empty() {
        script.push('\n');
    }
    let column_list = column_names.join(", ");
    for row in table.rows() {
        let values: Vec<String> = row
            .iter()
            .zip(&column_types)
            .map(|(cell, column_type)| render_value(cell, *column_type))
            .collect();
        script.push_str(&format!(
            "INSERT INTO {table_name} ({column_list}) VALUES ({});\n",
            values.join(", ")
        ));
    }

    tracing::debug!(
        table = %options.table_name,
        dialect = %options.dialect,
        statements = table.height() + 1,
        "rendered SQL script"
    );
    script
}

/// Render and write the SQL script for a table.
pub fn write_sql(
    path: &Path,
    table: &Table,
    profiles: &[ColumnProfile],
    options: &SqlOptions,
) -> Result<()> {
    let script = render_sql(table, profiles, options);
    write_output(path, script.as_bytes())?;
    tracing::info!(path = %path.display(), rows = table.height(), "exported SQL script");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(
        column_type: ColumnType,
        int_digits: usize,
        frac_digits: usize,
        len: usize,
    ) -> ColumnProfile {
        let mut profile = ColumnProfile::new("col", column_type);
        profile.max_integer_digits = int_digits;
        profile.max_fraction_digits = frac_digits;
        profile.max_length = len;
        profile
    }

    #[test]
    fn test_reserved_words_sorted() {
        assert!(RESERVED_WORDS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("revenue"), "revenue");
        assert_eq!(quote_identifier("order"), "\"order\"");
        assert_eq!(quote_identifier("group"), "\"group\"");
        assert_eq!(quote_identifier("orders"), "orders");
    }

    #[test]
    fn test_quote_literal() {
        assert_eq!(quote_literal("Acme"), "'Acme'");
        assert_eq!(quote_literal("O'Neil"), "'O''Neil'");
        assert_eq!(quote_literal(""), "''");
    }

    #[test]
    fn test_integer_definitions() {
        let small = profile(ColumnType::Integer, 3, 0, 3);
        let large = profile(ColumnType::Integer, 12, 0, 12);
        assert_eq!(column_definition(&small, SqlDialect::Ansi), "INTEGER");
        assert_eq!(column_definition(&large, SqlDialect::Ansi), "BIGINT");
        assert_eq!(column_definition(&large, SqlDialect::Postgres), "BIGINT");
        assert_eq!(column_definition(&large, SqlDialect::Sqlite), "INTEGER");
    }

    #[test]
    fn test_decimal_definitions() {
        let decimal = profile(ColumnType::Decimal, 4, 2, 7);
        assert_eq!(column_definition(&decimal, SqlDialect::Ansi), "DECIMAL(6, 2)");
        assert_eq!(column_definition(&decimal, SqlDialect::Postgres), "NUMERIC");
        assert_eq!(column_definition(&decimal, SqlDialect::Sqlite), "REAL");
    }

    #[test]
    fn test_oversized_decimal_falls_back_to_double() {
        let widest = profile(ColumnType::Decimal, 36, 2, 39);
        let huge = profile(ColumnType::Decimal, 300, 0, 300);
        assert_eq!(column_definition(&widest, SqlDialect::Ansi), "DECIMAL(38, 2)");
        assert_eq!(column_definition(&huge, SqlDialect::Ansi), "DOUBLE PRECISION");
        assert_eq!(column_definition(&huge, SqlDialect::Postgres), "NUMERIC");
    }

    #[test]
    fn test_text_definitions() {
        let text = profile(ColumnType::Text, 0, 0, 12);
        let empty = profile(ColumnType::Text, 0, 0, 0);
        assert_eq!(column_definition(&text, SqlDialect::Ansi), "VARCHAR(12)");
        assert_eq!(column_definition(&empty, SqlDialect::Ansi), "VARCHAR(1)");
        assert_eq!(column_definition(&text, SqlDialect::Postgres), "TEXT");
        assert_eq!(column_definition(&text, SqlDialect::Sqlite), "TEXT");
    }

    #[test]
    fn test_render_values() {
        assert_eq!(render_value(&CleanedCell::Null, ColumnType::Integer), "NULL");
        assert_eq!(render_value(&CleanedCell::value("20.8"), ColumnType::Decimal), "20.8");
        assert_eq!(render_value(&CleanedCell::value("20.8"), ColumnType::Text), "'20.8'");
    }

    #[test]
    fn test_numeric_columns_emit_bare_literals() {
        let table = Table::try_new(
            vec![
                tabclean_model::Column::new("Name", "name"),
                tabclean_model::Column::new("Revenue", "revenue"),
            ],
            vec![vec![CleanedCell::value("Acme"), CleanedCell::value("1200.50")]],
        )
        .unwrap();
        let profiles = vec![
            ColumnProfile::new("name", ColumnType::Text),
            ColumnProfile::new("revenue", ColumnType::Decimal),
        ];
        let sql = render_sql(&table, &profiles, &SqlOptions::new("t"));
        assert!(sql.ends_with("INSERT INTO t (name, revenue) VALUES ('Acme', 1200.50);\n"));
        assert!(!sql.contains("'1200.50'"));
    }

    #[test]
    fn test_render_empty_table() {
        let table = Table::try_new(
            vec![tabclean_model::Column::new("Select", "select")],
            Vec::new(),
        )
        .unwrap();
        let profiles = vec![ColumnProfile::new("select", ColumnType::Text)];
        let sql = render_sql(&table, &profiles, &SqlOptions::new("t"));
        assert_eq!(sql, "CREATE TABLE t (\n    \"select\" VARCHAR(1)\n);\n");
    }
}

//! Cleaned CSV output.

use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use tabclean_model::Table;

use crate::common::write_output;
use crate::error::{OutputError, Result};

/// Render a table as comma-separated CSV.
///
/// The header row holds the normalized column names. Cells containing a
/// comma, quote or line break are quoted; NULL cells become empty fields.
pub fn render_csv(table: &Table) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(table.column_names())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.as_str().unwrap_or("")))?;
    }

    writer
        .into_inner()
        .map_err(|err| OutputError::Buffer(err.into_error()))
}

/// Render and write a table as CSV.
pub fn write_csv(path: &Path, table: &Table) -> Result<()> {
    let contents = render_csv(table)?;
    write_output(path, &contents)?;
    tracing::info!(path = %path.display(), rows = table.height(), "exported cleaned CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabclean_model::{CleanedCell, Column};

    fn table(rows: Vec<Vec<CleanedCell>>) -> Table {
        Table::try_new(
            vec![Column::new("Name", "name"), Column::new("Score", "score")],
            rows,
        )
        .unwrap()
    }

    #[test]
    fn test_render_header_and_rows() {
        let table = table(vec![vec![CleanedCell::value("Acme"), CleanedCell::value("20.8")]]);
        let csv = String::from_utf8(render_csv(&table).unwrap()).unwrap();
        assert_eq!(csv, "name,score\nAcme,20.8\n");
    }

    #[test]
    fn test_null_renders_empty() {
        let table = table(vec![vec![CleanedCell::value("Beta"), CleanedCell::Null]]);
        let csv = String::from_utf8(render_csv(&table).unwrap()).unwrap();
        assert_eq!(csv, "name,score\nBeta,\n");
    }

    #[test]
    fn test_quotes_special_cells() {
        let table = table(vec![vec![
            CleanedCell::value("Smith, \"J\""),
            CleanedCell::value("line\nbreak"),
        ]]);
        let csv = String::from_utf8(render_csv(&table).unwrap()).unwrap();
        assert_eq!(csv, "name,score\n\"Smith, \"\"J\"\"\",\"line\nbreak\"\n");
    }
}

//! Terminal rendering of command results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use tabclean_ingest::{CandidateScores, DetectionReport, StructureAnalysis};
use tabclean_model::ColumnType;

use crate::cli::IdentifyMode;
use crate::commands::{CleanOutcome, DelimiterSource, IdentifyOutcome};

/// Data rows shown in the clean preview.
pub const PREVIEW_ROWS: usize = 3;

#[derive(Serialize)]
struct IdentifyJson<'a> {
    path: String,
    #[serde(flatten)]
    report: &'a DetectionReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    structure: Option<&'a StructureAnalysis>,
}

/// Render the `identify` result for the chosen output mode.
pub fn render_identify(
    outcome: &IdentifyOutcome,
    mode: IdentifyMode,
) -> serde_json::Result<String> {
    let report = &outcome.report;
    let rendered = match mode {
        IdentifyMode::Quiet => report.format.to_string(),
        IdentifyMode::Json => {
            let json = IdentifyJson {
                path: outcome.path.display().to_string(),
                report,
                structure: outcome.structure.as_ref(),
            };
            serde_json::to_string_pretty(&json)?
        }
        IdentifyMode::Normal | IdentifyMode::Verbose => {
            let mut lines = vec![
                format!("File: {}", outcome.path.display()),
                format!("Format: {}", report.format),
                format!("Delimiter: {}", report.delimiter.escaped()),
                format!("Confidence: {:.1}%", report.confidence * 100.0),
            ];
            if mode == IdentifyMode::Verbose {
                lines.push(String::new());
                lines.push(format!("Candidate scores ({} lines sampled):", report.sampled_lines));
                lines.push(scores_table(&report.candidates).to_string());
                if let Some(structure) = &outcome.structure {
                    lines.push(String::new());
                    lines.push(render_structure(structure));
                }
            }
            lines.join("\n")
        }
    };
    Ok(rendered)
}

/// Structure analysis block for verbose `identify`.
pub fn render_structure(structure: &StructureAnalysis) -> String {
    let mut lines = vec![
        "Detailed Analysis:".to_string(),
        format!("  Columns: {}", structure.column_count),
        format!("  Headers: {}", structure.header_preview()),
        format!(
            "  Consistent structure: {}",
            if structure.consistent_columns { "Yes" } else { "No" }
        ),
    ];
    if !structure.consistent_columns {
        let counts: Vec<String> = structure
            .column_counts
            .iter()
            .map(ToString::to_string)
            .collect();
        lines.push(format!("  Column counts per row: [{}]", counts.join(", ")));
    }
    lines.join("\n")
}

fn scores_table(scores: &CandidateScores) -> Table {
    let best = scores.best().map(|score| score.delimiter);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Format"),
        header_cell("Delimiter"),
        header_cell("Fields"),
        header_cell("Matching"),
        header_cell("Consistency"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for score in scores.iter() {
        let format_cell = if Some(score.delimiter) == best {
            Cell::new(score.format)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(score.format)
        };
        let consistency = format!("{:.1}%", score.consistency * 100.0);
        table.add_row(vec![
            format_cell,
            Cell::new(score.delimiter.escaped()),
            Cell::new(score.modal_fields),
            Cell::new(format!("{}/{}", score.frequency, score.sampled)),
            if score.splits() {
                Cell::new(consistency)
            } else {
                dim_cell(consistency)
            },
        ]);
    }
    table
}

/// Progress, column summary and preview text for `clean`.
pub fn render_clean(outcome: &CleanOutcome) -> String {
    let mut lines = vec![format!("Processing file: {}", outcome.input.display())];
    match &outcome.delimiter_source {
        DelimiterSource::Detected(report) => lines.push(format!(
            "Auto-detected {} format (delimiter: {}, confidence {:.1}%)",
            report.format,
            outcome.delimiter.escaped(),
            report.confidence * 100.0
        )),
        DelimiterSource::Explicit => lines.push(format!(
            "Using {} format (delimiter: {})",
            outcome.delimiter.label(),
            outcome.delimiter.escaped()
        )),
    }
    lines.push(format!(
        "Cleaned {} data rows across {} columns ({} NULL, {} converted)",
        outcome.table.height(),
        outcome.table.width(),
        outcome.stats.null_cells,
        outcome.stats.converted_cells
    ));
    lines.push(String::new());
    lines.push(columns_table(outcome).to_string());

    let shown = outcome.table.height().min(PREVIEW_ROWS);
    lines.push(String::new());
    lines.push(format!("Sample of cleaned data (first {shown} rows):"));
    lines.push(preview_table(outcome).to_string());

    lines.push(String::new());
    lines.push("Outputs:".to_string());
    if let Some(path) = &outcome.csv_path {
        lines.push(format!("  - Cleaned CSV: {}", path.display()));
    }
    if let Some(path) = &outcome.sql_path {
        lines.push(format!(
            "  - SQL statements: {} (table {})",
            path.display(),
            outcome.table_name
        ));
    }
    lines.join("\n")
}

fn columns_table(outcome: &CleanOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Header"),
        header_cell("Column"),
        header_cell("Type"),
        header_cell("NULLs"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for (column, profile) in outcome.table.columns().iter().zip(&outcome.profiles) {
        let renamed = column.source != column.name;
        table.add_row(vec![
            Cell::new(&column.source),
            if renamed {
                Cell::new(&column.name).fg(Color::Cyan)
            } else {
                Cell::new(&column.name)
            },
            type_cell(profile.column_type),
            count_cell(profile.null_count),
        ]);
    }
    table
}

fn preview_table(outcome: &CleanOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(
        outcome
            .table
            .column_names()
            .into_iter()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in outcome.table.rows().iter().take(PREVIEW_ROWS) {
        table.add_row(
            row.iter()
                .map(|cell| match cell.as_str() {
                    Some(value) => Cell::new(value),
                    None => dim_cell("NULL"),
                })
                .collect::<Vec<_>>(),
        );
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn type_cell(column_type: ColumnType) -> Cell {
    let color = match column_type {
        ColumnType::Integer => Color::Blue,
        ColumnType::Decimal => Color::Magenta,
        ColumnType::Text => Color::Reset,
    };
    Cell::new(column_type.as_str()).fg(color)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

//! End-to-end tests for the identify and clean commands.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tabclean_cli::cli::{CleanCli, IdentifyCli, IdentifyMode};
use tabclean_cli::commands::{DelimiterSource, run_clean, run_identify};
use tabclean_cli::summary::{render_clean, render_identify};
use tabclean_model::{ColumnType, Delimiter};

const METRICS_TSV: &str = "Company\tRevenue ($)\tARR Multiple\tGrowth\n \
Acme \t1200.50\t20.8x\t29%\n\
Beta\tN/A\t3X\t-6%\n\
Gamma\tNULL\tn/a\t12.5%\n";

fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn identify(args: &[&str]) -> IdentifyCli {
    IdentifyCli::try_parse_from(std::iter::once("identify").chain(args.iter().copied())).unwrap()
}

fn clean(args: &[&str]) -> CleanCli {
    CleanCli::try_parse_from(std::iter::once("clean").chain(args.iter().copied())).unwrap()
}

#[test]
fn identify_reports_tab_delimited_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "metrics.txt", METRICS_TSV);
    let cli = identify(&[path.to_str().unwrap()]);

    let outcome = run_identify(&cli).unwrap();
    assert_eq!(outcome.report.delimiter, Delimiter::Tab);
    assert_eq!(outcome.report.format, "TSV");
    assert!((outcome.report.confidence - 1.0).abs() < f64::EPSILON);
    assert!(outcome.structure.is_none());

    let text = render_identify(&outcome, cli.mode()).unwrap();
    assert!(text.contains("Format: TSV\n"));
    assert!(text.contains("Delimiter: '\\t'\n"));
    assert!(text.ends_with("Confidence: 100.0%"));
}

#[test]
fn identify_quiet_prints_only_the_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "metrics.txt", METRICS_TSV);
    let cli = identify(&[path.to_str().unwrap(), "--quiet"]);

    let outcome = run_identify(&cli).unwrap();
    assert_eq!(render_identify(&outcome, IdentifyMode::Quiet).unwrap(), "TSV");
}

#[test]
fn identify_verbose_includes_structure() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "metrics.txt", METRICS_TSV);
    let cli = identify(&[path.to_str().unwrap(), "--verbose"]);

    let outcome = run_identify(&cli).unwrap();
    let structure = outcome.structure.as_ref().unwrap();
    assert_eq!(structure.column_count, 4);
    assert!(structure.consistent_columns);

    let text = render_identify(&outcome, IdentifyMode::Verbose).unwrap();
    assert!(text.contains("Candidate scores (4 lines sampled):"));
    assert!(text.contains("SEMICOLON"));
    assert!(text.contains("  Headers: Company, Revenue ($), ARR Multiple, Growth"));
}

#[test]
fn identify_json_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "metrics.csv", "a,b,c\n1,2,3\n4,5,6\n");
    let cli = identify(&[path.to_str().unwrap(), "--json"]);

    let outcome = run_identify(&cli).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&render_identify(&outcome, IdentifyMode::Json).unwrap()).unwrap();
    assert_eq!(json["format"], "CSV");
    assert_eq!(json["delimiter"], "comma");
    assert_eq!(json["candidates"].as_array().unwrap().len(), 4);
}

#[test]
fn identify_fails_without_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "words.txt", "alpha\nbeta\ngamma\n");
    let err = run_identify(&identify(&[path.to_str().unwrap()])).unwrap_err();
    assert!(format!("{err:#}").contains("could not detect a delimiter"));
}

#[test]
fn identify_fails_on_ambiguous_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "mixed.txt", "a,b\nc,d\ne\nf,g,h\ni\n");
    let err = run_identify(&identify(&[path.to_str().unwrap()])).unwrap_err();
    assert!(format!("{err:#}").contains("ambiguous"));

    let relaxed = identify(&[path.to_str().unwrap(), "--min-consistency=0.4"]);
    assert_eq!(run_identify(&relaxed).unwrap().report.format, "CSV");
}

#[test]
fn identify_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = run_identify(&identify(&[path.to_str().unwrap()])).unwrap_err();
    assert!(format!("{err:#}").contains("file not found"));
}

#[test]
fn clean_writes_default_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "metrics.txt", METRICS_TSV);

    let outcome = run_clean(&clean(&[path.to_str().unwrap()])).unwrap();
    assert!(matches!(outcome.delimiter_source, DelimiterSource::Detected(_)));
    assert_eq!(outcome.table_name, "metrics");

    let csv_path = dir.path().join("metrics.clean.csv");
    let sql_path = dir.path().join("metrics.sql");
    assert_eq!(outcome.csv_path.as_deref(), Some(csv_path.as_path()));
    assert_eq!(outcome.sql_path.as_deref(), Some(sql_path.as_path()));

    assert_eq!(
        fs::read_to_string(&csv_path).unwrap(),
        "company,revenue,arr_multiple,growth\n\
         Acme,1200.50,20.8,29.0\n\
         Beta,,3,-6.0\n\
         Gamma,,,12.5\n"
    );

    let sql = fs::read_to_string(&sql_path).unwrap();
    assert!(sql.starts_with(
        "CREATE TABLE metrics (\n    company VARCHAR(5),\n    revenue DECIMAL(6, 2),\n    \
         arr_multiple DECIMAL(3, 1),\n    growth DECIMAL(3, 1)\n);\n"
    ));
    assert!(sql.contains(
        "INSERT INTO metrics (company, revenue, arr_multiple, growth) \
         VALUES ('Acme', 1200.50, 20.8, 29.0);"
    ));
    assert!(sql.contains("VALUES ('Gamma', NULL, NULL, 12.5);"));

    let types: Vec<ColumnType> = outcome.profiles.iter().map(|p| p.column_type).collect();
    assert_eq!(
        types,
        vec![ColumnType::Text, ColumnType::Decimal, ColumnType::Decimal, ColumnType::Decimal]
    );
}

#[test]
fn clean_respects_explicit_paths_and_skips() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "metrics.txt", METRICS_TSV);
    let out = dir.path().join("out").join("cleaned.csv");

    let outcome = run_clean(&clean(&[
        path.to_str().unwrap(),
        "--tsv",
        "-o",
        out.to_str().unwrap(),
        "--no-sql",
    ]))
    .unwrap();

    assert!(matches!(outcome.delimiter_source, DelimiterSource::Explicit));
    assert!(out.exists());
    assert!(outcome.sql_path.is_none());
    assert!(!dir.path().join("metrics.sql").exists());
    assert!(!dir.path().join("metrics.clean.csv").exists());
}

#[test]
fn clean_with_escaped_tab_and_reserved_table_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "metrics.txt", METRICS_TSV);
    let sql_path = dir.path().join("orders.sql");

    run_clean(&clean(&[
        path.to_str().unwrap(),
        "--delimiter",
        "\\t",
        "--table-name",
        "Order",
        "-s",
        sql_path.to_str().unwrap(),
        "--no-csv",
        "--dialect",
        "sqlite",
    ]))
    .unwrap();

    let sql = fs::read_to_string(&sql_path).unwrap();
    assert!(sql.starts_with("CREATE TABLE \"order\" (\n    company TEXT,\n    revenue REAL,"));
}

#[test]
fn clean_applies_extra_null_markers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "scores.csv", "name,score\nAnn,-\nBob,7\n");

    let outcome = run_clean(&clean(&[
        path.to_str().unwrap(),
        "--csv",
        "--null-marker",
        "-",
        "--no-sql",
    ]))
    .unwrap();
    assert_eq!(outcome.profiles[1].column_type, ColumnType::Integer);
    assert_eq!(outcome.profiles[1].null_count, 1);
}

#[test]
fn clean_rejects_malformed_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "bad.csv", "a,b\n1,2\n3\n");

    let err = run_clean(&clean(&[path.to_str().unwrap(), "--csv"])).unwrap_err();
    assert!(format!("{err:#}").contains("line 3"));
    assert!(!dir.path().join("bad.clean.csv").exists());
}

#[test]
fn clean_rejects_header_only_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "empty.csv", "a,b\n");

    let err = run_clean(&clean(&[path.to_str().unwrap(), "--csv"])).unwrap_err();
    assert!(format!("{err:#}").contains("no data rows"));
}

#[test]
fn clean_summary_lists_columns_and_preview() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "metrics.txt", METRICS_TSV);

    let outcome = run_clean(&clean(&[path.to_str().unwrap(), "--no-sql"])).unwrap();
    let text = render_clean(&outcome);
    assert!(text.contains("Auto-detected TSV format"));
    assert!(text.contains("arr_multiple"));
    assert!(text.contains("DECIMAL"));
    assert!(text.contains("Sample of cleaned data (first 3 rows):"));
    assert!(text.contains("  - Cleaned CSV:"));
    assert!(!text.contains("SQL statements"));
}

#[test]
fn clean_refuses_to_overwrite_sql_input() {
    let dir = tempfile::tempdir().unwrap();
    let contents = "id\tname\n1\tAcme\n";
    let path = write_fixture(dir.path(), "export.sql", contents);

    let err = run_clean(&clean(&[path.to_str().unwrap()])).unwrap_err();
    assert!(format!("{err:#}").contains("refusing to overwrite input file"));
    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    assert!(!dir.path().join("export.clean.csv").exists());

    let sql_path = dir.path().join("export.out.sql");
    let outcome = run_clean(&clean(&[
        path.to_str().unwrap(),
        "-s",
        sql_path.to_str().unwrap(),
    ]))
    .unwrap();
    assert_eq!(outcome.sql_path.as_deref(), Some(sql_path.as_path()));
    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
}

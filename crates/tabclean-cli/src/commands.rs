//! Command implementations shared by the binaries.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use tabclean_ingest::{
    DetectionReport, StructureAnalysis, analyze_structure, detect_delimiter, detect_from_sample,
    read_raw_table, read_sample,
};
use tabclean_model::{CleanOptions, ColumnProfile, Delimiter, DetectOptions, Table};
use tabclean_output::{SqlOptions, write_csv, write_sql};
use tabclean_transform::{CleanStats, clean_table, infer_column_profiles, normalize_table_name};

use crate::cli::{CleanCli, IdentifyCli, IdentifyMode};

/// Result of `identify`.
#[derive(Debug)]
pub struct IdentifyOutcome {
    pub path: PathBuf,
    pub report: DetectionReport,
    /// Present in verbose mode.
    pub structure: Option<StructureAnalysis>,
}

/// How the delimiter for `clean` was chosen.
#[derive(Debug)]
pub enum DelimiterSource {
    Explicit,
    Detected(DetectionReport),
}

/// Result of `clean`.
#[derive(Debug)]
pub struct CleanOutcome {
    pub input: PathBuf,
    pub delimiter: Delimiter,
    pub delimiter_source: DelimiterSource,
    pub table: Table,
    pub stats: CleanStats,
    pub profiles: Vec<ColumnProfile>,
    pub table_name: String,
    pub csv_path: Option<PathBuf>,
    pub sql_path: Option<PathBuf>,
}

pub fn run_identify(args: &IdentifyCli) -> Result<IdentifyOutcome> {
    let options = args.detect_options();
    let path = &args.path;
    let _span = info_span!("identify", path = %path.display()).entered();

    let sample = read_sample(path, options.sample_lines)
        .with_context(|| format!("failed to sample {}", path.display()))?;
    let report = detect_from_sample(&sample, &options)
        .with_context(|| format!("failed to identify the format of {}", path.display()))?;
    let structure = match args.mode() {
        IdentifyMode::Verbose => analyze_structure(&sample, report.delimiter),
        _ => None,
    };

    Ok(IdentifyOutcome {
        path: path.clone(),
        report,
        structure,
    })
}

pub fn run_clean(args: &CleanCli) -> Result<CleanOutcome> {
    let input = &args.path;
    let _span = info_span!("clean", path = %input.display()).entered();

    let (default_csv, default_sql) = default_output_paths(input);
    let csv_path = (!args.no_csv).then(|| args.output_csv.clone().unwrap_or(default_csv));
    let sql_path = (!args.no_sql).then(|| args.output_sql.clone().unwrap_or(default_sql));
    for output in csv_path.iter().chain(&sql_path) {
        ensure_not_input(output, input)?;
    }

    let (delimiter, delimiter_source) = match args.explicit_delimiter() {
        Some(delimiter) => (delimiter, DelimiterSource::Explicit),
        None => {
            let options = DetectOptions::default().with_sample_lines(args.sample_lines);
            let report = detect_delimiter(input, &options)
                .with_context(|| format!("failed to identify the format of {}", input.display()))?;
            (report.delimiter, DelimiterSource::Detected(report))
        }
    };
    debug!(delimiter = %delimiter.escaped(), "using delimiter");

    let raw = read_raw_table(input, delimiter)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let options = CleanOptions::default().with_extra_null_markers(&args.null_markers);
    let cleaned = clean_table(&raw.headers, raw.rows.iter().map(|row| &row.cells), &options)
        .context("failed to clean table")?;
    let profiles = infer_column_profiles(&cleaned.table);

    let table_name = match &args.table_name {
        Some(name) => normalize_table_name(name),
        None => normalize_table_name(&file_stem(input)),
    };

    if let Some(path) = &csv_path {
        write_csv(path, &cleaned.table).context("failed to write cleaned CSV")?;
    }
    if let Some(path) = &sql_path {
        let sql_options = SqlOptions::new(table_name.as_str()).with_dialect(args.dialect.into());
        write_sql(path, &cleaned.table, &profiles, &sql_options)
            .context("failed to write SQL script")?;
    }

    info!(
        rows = cleaned.table.height(),
        columns = cleaned.table.width(),
        "cleaning complete"
    );

    Ok(CleanOutcome {
        input: input.clone(),
        delimiter,
        delimiter_source,
        table: cleaned.table,
        stats: cleaned.stats,
        profiles,
        table_name,
        csv_path,
        sql_path,
    })
}

/// Default outputs next to the input: `<stem>.clean.csv` and `<stem>.sql`.
pub fn default_output_paths(input: &Path) -> (PathBuf, PathBuf) {
    let stem = file_stem(input);
    (
        input.with_file_name(format!("{stem}.clean.csv")),
        input.with_file_name(format!("{stem}.sql")),
    )
}

/// Refuse an output path that names the input file.
///
/// A `<stem>.sql` input would otherwise be truncated by its own default
/// SQL output.
fn ensure_not_input(output: &Path, input: &Path) -> Result<()> {
    let same = match (fs::canonicalize(output), fs::canonicalize(input)) {
        (Ok(output), Ok(input)) => output == input,
        _ => output == input,
    };
    if same {
        bail!(
            "refusing to overwrite input file {}; pass -o/-s or --no-csv/--no-sql",
            output.display()
        );
    }
    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

//! CLI argument definitions for the `identify` and `clean` binaries.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ArgGroup, Args, ColorChoice, Parser, ValueEnum};
use colorchoice_clap::Color;
use tabclean_model::{DEFAULT_MIN_CONSISTENCY, DEFAULT_SAMPLE_LINES, Delimiter, DetectOptions};
use tabclean_output::SqlDialect;
use tracing::Level;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser, Debug)]
#[command(
    name = "identify",
    version,
    about = "Identify the delimiter of a delimited text file",
    long_about = "Identify the delimiter of a delimited text file.\n\n\
                  Samples the first lines of the file and scores tab, comma, pipe and\n\
                  semicolon by how consistently each splits lines into the same number\n\
                  of fields."
)]
pub struct IdentifyCli {
    /// Delimited file to inspect.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Show scores for every candidate and a structure analysis.
    #[arg(short = 'v', long, conflicts_with_all = ["quiet", "json"])]
    pub verbose: bool,

    /// Print only the format token (TSV, CSV, PIPE or SEMICOLON).
    #[arg(short = 'q', long, conflicts_with = "json")]
    pub quiet: bool,

    /// Print the detection report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Number of non-blank lines to sample.
    #[arg(
        long = "sample-lines",
        value_name = "N",
        default_value_t = DEFAULT_SAMPLE_LINES,
        value_parser = parse_sample_lines
    )]
    pub sample_lines: usize,

    /// Minimum consistency (0.0 to 1.0) the best delimiter must reach.
    #[arg(
        long = "min-consistency",
        value_name = "F",
        default_value_t = DEFAULT_MIN_CONSISTENCY,
        value_parser = parse_fraction
    )]
    pub min_consistency: f64,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// How `identify` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifyMode {
    Normal,
    Verbose,
    Quiet,
    Json,
}

impl IdentifyCli {
    pub fn mode(&self) -> IdentifyMode {
        if self.json {
            IdentifyMode::Json
        } else if self.quiet {
            IdentifyMode::Quiet
        } else if self.verbose {
            IdentifyMode::Verbose
        } else {
            IdentifyMode::Normal
        }
    }

    pub fn detect_options(&self) -> DetectOptions {
        DetectOptions::default()
            .with_sample_lines(self.sample_lines)
            .with_min_consistency(self.min_consistency)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "clean",
    version,
    about = "Clean a delimited file into CSV and a SQL script",
    long_about = "Clean a delimited file into CSV and a SQL script.\n\n\
                  Trims cells, maps NULL markers, strips numeric suffixes such as\n\
                  20.8x and 29%, normalizes headers into SQL identifiers and infers\n\
                  INTEGER, DECIMAL or TEXT column types.",
    group(ArgGroup::new("format").multiple(false))
)]
pub struct CleanCli {
    /// Delimited file to clean.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Input is tab-separated.
    #[arg(long, group = "format")]
    pub tsv: bool,

    /// Input is comma-separated.
    #[arg(long, group = "format")]
    pub csv: bool,

    /// Input is pipe-separated.
    #[arg(long, group = "format")]
    pub pipe: bool,

    /// Input is semicolon-separated.
    #[arg(long, group = "format")]
    pub semicolon: bool,

    /// Custom delimiter: one ASCII character, `\t`, `\\`, or tab/comma/pipe/semicolon.
    #[arg(long, value_name = "D", group = "format", value_parser = Delimiter::parse)]
    pub delimiter: Option<Delimiter>,

    /// Cleaned CSV path (default: <dir>/<stem>.clean.csv).
    #[arg(short = 'o', long = "output-csv", value_name = "PATH")]
    pub output_csv: Option<PathBuf>,

    /// SQL script path (default: <dir>/<stem>.sql).
    #[arg(short = 's', long = "output-sql", value_name = "PATH")]
    pub output_sql: Option<PathBuf>,

    /// SQL table name (default: normalized file stem).
    #[arg(short = 't', long = "table-name", value_name = "NAME")]
    pub table_name: Option<String>,

    /// SQL dialect for column types.
    #[arg(long, value_enum, default_value = "ansi")]
    pub dialect: DialectArg,

    /// Do not write the cleaned CSV.
    #[arg(long = "no-csv", conflicts_with_all = ["no_sql", "output_csv"])]
    pub no_csv: bool,

    /// Do not write the SQL script.
    #[arg(long = "no-sql", conflicts_with = "output_sql")]
    pub no_sql: bool,

    /// Number of non-blank lines sampled when detecting the delimiter.
    #[arg(
        long = "sample-lines",
        value_name = "N",
        default_value_t = DEFAULT_SAMPLE_LINES,
        value_parser = parse_sample_lines
    )]
    pub sample_lines: usize,

    /// Extra value treated as NULL (repeatable; case-insensitive).
    #[arg(long = "null-marker", value_name = "M")]
    pub null_markers: Vec<String>,

    /// Suppress progress and preview output.
    #[arg(short = 'q', long)]
    pub quiet: bool,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl CleanCli {
    /// Delimiter chosen on the command line, if any.
    pub fn explicit_delimiter(&self) -> Option<Delimiter> {
        if self.tsv {
            Some(Delimiter::Tab)
        } else if self.csv {
            Some(Delimiter::Comma)
        } else if self.pipe {
            Some(Delimiter::Pipe)
        } else if self.semicolon {
            Some(Delimiter::Semicolon)
        } else {
            self.delimiter
        }
    }
}

/// Logging options shared by both binaries.
#[derive(Args, Debug)]
pub struct LoggingArgs {
    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log level (default: warn; RUST_LOG applies when unset).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl LoggingArgs {
    /// Build logging configuration from CLI flags with consistent precedence.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig::default();
        if let Some(level) = self.log_level {
            config.level = level.into();
            config.use_env_filter = false;
        }
        config.format = self.log_format.into();
        config.log_file = self.log_file.clone();
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for Level {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

/// CLI SQL dialect choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    Ansi,
    Postgres,
    Sqlite,
}

impl From<DialectArg> for SqlDialect {
    fn from(dialect: DialectArg) -> Self {
        match dialect {
            DialectArg::Ansi => SqlDialect::Ansi,
            DialectArg::Postgres => SqlDialect::Postgres,
            DialectArg::Sqlite => SqlDialect::Sqlite,
        }
    }
}

fn parse_sample_lines(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(lines) => Ok(lines),
        Err(err) => Err(err.to_string()),
    }
}

fn parse_fraction(value: &str) -> Result<f64, String> {
    let fraction: f64 = value.parse().map_err(|err| format!("{err}"))?;
    if (0.0..=1.0).contains(&fraction) {
        Ok(fraction)
    } else {
        Err("must be between 0.0 and 1.0".to_string())
    }
}

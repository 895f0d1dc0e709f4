//! CLI argument definitions for the dashboard generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use dashgen_ingest::MAX_FILE_SIZE;
use dashgen_report::{DEFAULT_CHART_SAMPLES, DEFAULT_DISTRIBUTION_LIMIT, DEFAULT_PREVIEW_ROWS};

#[derive(Parser)]
#[command(
    name = "dashgen",
    version,
    about = "Dashboard generator - statistics, data quality and correlations for CSV files",
    long_about = "Analyse a comma-delimited text file.\n\n\
                  Classifies columns as numeric or categorical, computes descriptive\n\
                  statistics, counts missing values and outliers, and ranks strong\n\
                  pairwise correlations between numeric columns."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values to appear in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyse a CSV file and print its dashboard.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the comma-delimited text file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Pair correlation samples by row instead of by position.
    ///
    /// By default each column drops its own non-numeric values and the
    /// remaining values are paired by position. With this flag only rows where
    /// both columns hold a number are paired.
    #[arg(long = "row-aligned")]
    pub row_aligned: bool,

    /// Number of rows shown in the preview table.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview_rows: usize,

    /// Number of leading values charted per numeric column (JSON output).
    #[arg(long = "chart-samples", value_name = "N", default_value_t = DEFAULT_CHART_SAMPLES)]
    pub chart_samples: usize,

    /// Number of most frequent values kept per categorical column.
    #[arg(long = "top-values", value_name = "N", default_value_t = DEFAULT_DISTRIBUTION_LIMIT)]
    pub top_values: usize,

    /// Reject files larger than this many bytes.
    #[arg(long = "max-size", value_name = "BYTES", default_value_t = MAX_FILE_SIZE)]
    pub max_size: u64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

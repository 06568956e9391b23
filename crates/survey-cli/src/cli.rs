//! CLI argument definitions for the survey tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "survey",
    version,
    about = "Parse and normalize survey exports",
    long_about = "Parse semi-structured survey exports into typed records.\n\n\
                  Handles quoted answers spanning several lines, legacy encodings\n\
                  and free-text answers normalized onto closed label sets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse an export and write the dashboard data.
    Parse(ParseArgs),

    /// Print the answer distribution of every question.
    Summary(InputArgs),

    /// Print the filter values and age span of an export.
    Facets(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Path to the survey export.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field delimiter of the export.
    #[arg(long = "delimiter", default_value_t = survey_ingest::DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Number of physical header lines to skip.
    #[arg(long = "header-lines", default_value_t = survey_ingest::options::DEFAULT_HEADER_LINES)]
    pub header_lines: usize,

    /// Youngest accepted age.
    #[arg(long = "min-age", default_value_t = 16)]
    pub min_age: i32,

    /// Oldest accepted age.
    #[arg(long = "max-age", default_value_t = 100)]
    pub max_age: i32,
}

#[derive(Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (default: stdout).
    #[arg(long = "out", short = 'o', value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// Dashboard records, facets and KPIs as pretty JSON.
    Json,
    /// Dashboard records as flat CSV.
    Csv,
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

//! CLI argument definitions for the salary guide.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use salary_cli::config::SortKey;

#[derive(Parser)]
#[command(
    name = "salary-guide",
    version,
    about = "Browse published university salary records",
    long_about = "Browse published university salary records.\n\n\
                  Reads a static asset tree (contents.txt manifests and JSON datasets),\n\
                  filters by college and department, searches by name, and pages\n\
                  through the results."
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

    /// Allow employee names to appear in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Include timestamps in log output.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Asset directory holding contents.txt (overrides SALARY_ASSETS_DIR).
    #[arg(long = "assets", value_name = "DIR", global = true)]
    pub assets: Option<PathBuf>,

    /// TOML config file with defaults for assets, page size and sort.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List available years, newest first.
    Years,

    /// List the locations (campuses) published for a year.
    Locations(YearArgs),

    /// Show a page of salary records.
    Browse(BrowseArgs),

    /// Show autocomplete options for the next filter level.
    Options(OptionsArgs),

    /// Convert a salary CSV export into a dataset JSON file.
    Convert(ConvertArgs),
}

#[derive(Args)]
pub struct YearArgs {
    /// Year to use (default: newest).
    #[arg(long = "year")]
    pub year: Option<String>,
}

#[derive(Args)]
pub struct DatasetArgs {
    #[command(flatten)]
    pub year: YearArgs,

    /// Location to use (default: first listed for the year).
    #[arg(long = "location")]
    pub location: Option<String>,
}

#[derive(Parser)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Only show records with a position in this college.
    #[arg(long = "college")]
    pub college: Option<String>,

    /// Only show records with a position in this department (requires --college).
    #[arg(long = "department")]
    pub department: Option<String>,

    /// Case-insensitive substring search on employee name.
    #[arg(long = "name")]
    pub name: Option<String>,

    /// Column to sort by.
    #[arg(long = "sort", value_enum)]
    pub sort: Option<SortKey>,

    /// Sort descending (applies to --sort or the configured sort).
    #[arg(long = "desc")]
    pub desc: bool,

    /// Page number, starting at 1.
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,

    /// Show each record's positions.
    #[arg(long = "expand")]
    pub expand: bool,
}

#[derive(Parser)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// College already chosen.
    #[arg(long = "college")]
    pub college: Option<String>,

    /// Department already chosen (requires --college).
    #[arg(long = "department")]
    pub department: Option<String>,

    /// Text typed so far; matches option prefixes case-insensitively.
    #[arg(long = "query", default_value = "")]
    pub query: String,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Salary CSV export to read.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Dataset JSON file to write.
    #[arg(value_name = "OUTPUT_JSON")]
    pub output: PathBuf,
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

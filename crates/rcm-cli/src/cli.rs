//! CLI argument definitions for the care-manager tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use rcm_core::{SortField, StatusFilter};
use rcm_model::ResidentStatus;

#[derive(Parser)]
#[command(
    name = "care-manager",
    version,
    about = "Resident Care Manager - volunteer-organization dashboard tooling",
    long_about = "Inspect and export resident rosters for a volunteer-management\n\
                  organization: search, filter, sort, paginate, and produce CSV\n\
                  exports from a JSON seed file."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Print one page of the resident roster after filters and sorting.
    List(ListArgs),

    /// Print aggregate statistics for the whole roster.
    Stats(StatsArgs),

    /// Write a CSV export of the selected residents.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Path to the JSON seed file holding the resident collection.
    #[arg(value_name = "SEED")]
    pub seed: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Residents per page (5, 10, 25, or 50).
    #[arg(long = "page-size", default_value_t = 10)]
    pub page_size: usize,

    /// 1-based page number; out-of-range values clamp.
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Path to the JSON seed file holding the resident collection.
    #[arg(value_name = "SEED")]
    pub seed: PathBuf,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Path to the JSON seed file holding the resident collection.
    #[arg(value_name = "SEED")]
    pub seed: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Resident ids to export (comma-separated or repeated).
    #[arg(long = "select", value_delimiter = ',', value_name = "ID")]
    pub select: Vec<u64>,

    /// Export every resident passing the filters.
    #[arg(long = "select-all", conflicts_with = "select")]
    pub select_all: bool,

    /// Directory the CSV file is written into.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

/// Shared filter/sort flags for `list` and `export`.
#[derive(Args)]
pub struct FilterArgs {
    /// Substring search over name, address, and contact number.
    #[arg(long)]
    pub search: Option<String>,

    /// Status dropdown filter.
    #[arg(long, value_enum, default_value = "all")]
    pub status: StatusArg,

    /// Tab selector; combined with --status (both must match).
    #[arg(long, value_enum, default_value = "all")]
    pub tab: StatusArg,

    /// Minimum age, inclusive.
    #[arg(long = "min-age")]
    pub min_age: Option<u32>,

    /// Maximum age, inclusive.
    #[arg(long = "max-age")]
    pub max_age: Option<u32>,

    /// Earliest join date (YYYY-MM-DD), inclusive.
    #[arg(long = "joined-after", value_name = "DATE")]
    pub joined_after: Option<NaiveDate>,

    /// Latest join date (YYYY-MM-DD), inclusive.
    #[arg(long = "joined-before", value_name = "DATE")]
    pub joined_before: Option<NaiveDate>,

    /// Sort column.
    #[arg(long, value_enum, default_value = "name")]
    pub sort: SortArg,

    /// Sort descending instead of ascending.
    #[arg(long)]
    pub desc: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    All,
    Active,
    Inactive,
    Pending,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => StatusFilter::All,
            StatusArg::Active => StatusFilter::Only(ResidentStatus::Active),
            StatusArg::Inactive => StatusFilter::Only(ResidentStatus::Inactive),
            StatusArg::Pending => StatusFilter::Only(ResidentStatus::Pending),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Name,
    Age,
    Gender,
    JoinDate,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortField::Name,
            SortArg::Age => SortField::Age,
            SortArg::Gender => SortField::Gender,
            SortArg::JoinDate => SortField::JoinDate,
        }
    }
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

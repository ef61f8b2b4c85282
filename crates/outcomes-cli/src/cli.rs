//! CLI argument definitions for the outcome statistics pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "outcomes-stats",
    version,
    about = "Employment-outcome statistics - derive chart-ready salary projections",
    long_about = "Derive analysis-ready projections from raw employment-outcome statistics.\n\n\
                  Builds a region x discipline cross-tabulation of average salaries and\n\
                  year-indexed salary series for a selected region or discipline."
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
    /// Build the region x discipline cross-tabulation of average salaries.
    Crosstab(CrosstabArgs),

    /// Build the salary time series for one selected discipline or region.
    Timeseries(TimeseriesArgs),

    /// List the region and discipline dictionaries.
    Entities(EntitiesArgs),
}

#[derive(Parser)]
pub struct CrosstabArgs {
    /// Path to the data folder containing the serialized API resources.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Read observations from a flat CSV export instead of stats.json.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Write the heatmap payload JSON into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TimeseriesArgs {
    /// Path to the data folder containing the serialized API resources.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Selected discipline, by id or display name.
    ///
    /// Exactly one of --discipline and --region must be given.
    #[arg(long = "discipline", value_name = "ID|NAME")]
    pub discipline: Option<String>,

    /// Selected region, by id or display name.
    #[arg(long = "region", value_name = "ID|NAME")]
    pub region: Option<String>,

    /// Read observations from a flat CSV export instead of stats.json.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Write the lines payload JSON into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct EntitiesArgs {
    /// Path to the data folder containing the serialized API resources.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,
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

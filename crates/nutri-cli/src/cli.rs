//! CLI argument definitions for the nutrition screening tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use nutri_cli::logging::LogFormat;
use nutri_model::{InvalidRowPolicy, SchemaProfile};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "nutri",
    version,
    about = "Student nutrition screening - classify BMI and MUAC from measurement tables",
    long_about = "Screen student anthropometric measurements for nutritional risk.\n\n\
                  Reads a CSV with gender, age, weight, height and arm circumference,\n\
                  derives BMI, BMI and MUAC categories and a growth-efficiency score,\n\
                  and summarizes the class with a high-risk list."
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

    /// Prefix log events with a timestamp and their module path.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow student identifiers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a measurement CSV and print the screening report.
    Analyze(AnalyzeArgs),

    /// Show the active classification thresholds.
    Thresholds(ThresholdsArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the measurement CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Accepted header convention.
    #[arg(long = "profile", value_enum, default_value = "unified")]
    pub profile: ProfileArg,

    /// JSON file overriding the default thresholds.
    #[arg(long = "thresholds", value_name = "FILE")]
    pub thresholds: Option<PathBuf>,

    /// Handling of rows with bad values or zero height.
    ///
    /// `fail` stops at the first bad row. `skip` leaves bad rows out of the
    /// report, lists them, and exits with status 1.
    #[arg(long = "on-invalid", value_enum, default_value = "fail")]
    pub on_invalid: InvalidRowArg,

    /// Write enriched.csv and summary.json into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print only the summary and the high-risk list.
    #[arg(long = "risk-only")]
    pub risk_only: bool,
}

#[derive(Parser)]
pub struct ThresholdsArgs {
    /// JSON file overriding the default thresholds.
    #[arg(long = "thresholds", value_name = "FILE")]
    pub thresholds: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProfileArg {
    Unified,
    Dashboard,
    Screening,
}

impl From<ProfileArg> for SchemaProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Unified => SchemaProfile::Unified,
            ProfileArg::Dashboard => SchemaProfile::Dashboard,
            ProfileArg::Screening => SchemaProfile::Screening,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InvalidRowArg {
    Fail,
    Skip,
}

impl From<InvalidRowArg> for InvalidRowPolicy {
    fn from(arg: InvalidRowArg) -> Self {
        match arg {
            InvalidRowArg::Fail => InvalidRowPolicy::Fail,
            InvalidRowArg::Skip => InvalidRowPolicy::Skip,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

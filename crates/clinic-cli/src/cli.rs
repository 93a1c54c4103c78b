//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "clinic",
    version,
    about = "Load clinical extracts and drive the referral workflow",
    long_about = "Load patient, clinician, facility, appointment, prescription, referral and\n\
                  staff extracts into memory, inspect them, and run the referral workflow\n\
                  (queueing, email and EHR audit entries, referral document export)."
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

    /// Configuration file (default: ./clinic.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Explicit log level (overrides -v/-q flags and the config file).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormatArg>,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load every extract and summarize what was read.
    Load(LoadArgs),

    /// Print one entity collection.
    List(ListArgs),

    /// Referral workflow operations.
    #[command(subcommand)]
    Referral(ReferralCommand),
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Folder containing the extracts (default: `data_dir` from config).
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print the load report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Entity to list (patients, clinicians, facilities, appointments,
    /// prescriptions, referrals, staff).
    #[arg(value_name = "ENTITY")]
    pub entity: String,

    /// Folder containing the extracts (default: `data_dir` from config).
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print records as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum ReferralCommand {
    /// Write the referral document for one referral.
    Export(ExportArgs),

    /// Queue every loaded referral and process the queue.
    Process(ProcessArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Referral to export.
    #[arg(value_name = "REFERRAL_ID")]
    pub referral_id: String,

    /// Folder containing the extracts (default: `data_dir` from config).
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output file (default: <output_dir>/referral_<REFERRAL_ID>.txt).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Folder containing the extracts (default: `data_dir` from config).
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Number of times to process the queue.
    #[arg(long = "passes", default_value_t = 1)]
    pub passes: usize,

    /// Print every generated audit entry.
    #[arg(long = "show-entries")]
    pub show_entries: bool,
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

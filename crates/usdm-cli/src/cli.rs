//! CLI argument definitions for the USDM builder.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "usdm",
    version,
    about = "Build CDISC USDM study definitions as JSON",
    long_about = "Build CDISC Unified Study Definitions Model (USDM) documents.\n\n\
                  Generates a minimal study from a title, identifier and protocol version,\n\
                  emits a fully populated sample study, or summarizes an existing document."
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

    /// CDISC controlled terminology release used for generated codes.
    #[arg(long = "code-system-version", value_name = "DATE", global = true)]
    pub code_system_version: Option<String>,

    /// Code system for sponsor-defined codes.
    #[arg(long = "sponsor-code-system", value_name = "SYSTEM", global = true)]
    pub sponsor_code_system: Option<String>,

    /// Version of the sponsor code system.
    #[arg(
        long = "sponsor-code-system-version",
        value_name = "VERSION",
        default_value = "1",
        global = true,
        requires = "sponsor_code_system"
    )]
    pub sponsor_code_system_version: String,

    /// Generate random UUIDs instead of sequential ids.
    #[arg(long = "uuid-ids", global = true)]
    pub uuid_ids: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the smallest valid study.
    Minimum(MinimumArgs),

    /// Build a fully populated sample study.
    Sample(OutputArgs),

    /// Print a summary of a USDM JSON document.
    Summary(SummaryArgs),
}

#[derive(Parser)]
pub struct MinimumArgs {
    /// Official study title.
    #[arg(long = "title")]
    pub title: String,

    /// Sponsor study identifier.
    #[arg(long = "identifier")]
    pub identifier: String,

    /// Protocol document version.
    #[arg(long = "protocol-version", value_name = "VERSION", default_value = "1")]
    pub protocol_version: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Write the document to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Emit single-line JSON.
    #[arg(long = "compact")]
    pub compact: bool,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// USDM JSON document to summarize.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
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

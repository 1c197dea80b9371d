//! CLI argument definitions for the prompt practice tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pps",
    version,
    about = "Prompt Practice Studio - score blog-writing prompts from the terminal",
    long_about = "Score blog-writing prompts against the practice catalog.\n\n\
                  Lists the exercise steps and evaluates a prompt draft with the\n\
                  same feedback rules the desktop app uses."
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
    /// List the exercise steps of the catalog.
    Steps(CatalogArgs),

    /// Evaluate a prompt draft against one exercise step.
    Evaluate(EvaluateArgs),
}

#[derive(Parser, Default)]
pub struct CatalogArgs {
    /// Catalog TOML file to use instead of the built-in content.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

#[derive(Parser)]
pub struct EvaluateArgs {
    /// Id of the exercise step whose requirements are checked.
    #[arg(long = "step", value_name = "ID")]
    pub step: String,

    /// Read the prompt from a file (default: stdin).
    #[arg(long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format for the evaluation.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
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

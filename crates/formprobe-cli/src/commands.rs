//! CLI command definitions using clap

use crate::config::ColorChoice;
use crate::output::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Formprobe: analyze, fill and score sample forms for autofill testing
#[derive(Parser, Debug)]
#[command(name = "formprobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze field detection for a form fixture
    Analyze(AnalyzeArgs),

    /// Fill a form fixture synthetically and score the session
    Fill(FillArgs),

    /// Validate a single input value
    Validate(ValidateArgs),
}

/// Arguments for the analyze command
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// JSON fixture of field descriptors
    pub fixture: PathBuf,

    /// Report format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,

    /// Number of top-scoring fields to list
    #[arg(long)]
    pub top: Option<usize>,

    /// Session configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the fill command
#[derive(Parser, Debug)]
pub struct FillArgs {
    /// JSON fixture of field descriptors
    pub fixture: PathBuf,

    /// Form identifier (defaults to the fixture's formId)
    #[arg(long)]
    pub form: Option<String>,

    /// Number of fill attempts to record
    #[arg(long, default_value = "1")]
    pub runs: u32,

    /// Report format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,

    /// Session configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Kind of value
    pub kind: ValidateKind,

    /// Value to check
    pub value: String,
}

/// Value kinds the validate command understands
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidateKind {
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Absolute URL
    Url,
    /// Password strength
    Password,
}

/// Report format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Detect terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

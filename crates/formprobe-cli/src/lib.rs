//! Formprobe CLI Library
//!
//! Command-line front end for the formprobe field detection and
//! fill-scoring engine.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    AnalyzeArgs, Cli, ColorArg, Commands, FillArgs, FormatArg, ValidateArgs, ValidateKind,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Printer};

//! Formprobe CLI: field detection and fill scoring for autofill testing
//!
//! ## Usage
//!
//! ```bash
//! formprobe analyze signup.json               # Detection report
//! formprobe analyze signup.json --format json # Machine-readable report
//! formprobe fill signup.json --runs 3         # Simulated fills + session score
//! formprobe validate email john@example.com   # Check one value
//! ```

use clap::Parser;
use formprobe_cli::{
    handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, OutputFormat, Printer,
    Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<bool> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    let use_color = config.color.should_color();
    logging::init_tracing(config.verbosity, use_color);
    let printer = Printer::new(use_color, config.verbosity.is_quiet());

    let rendered = match &cli.command {
        Commands::Analyze(args) => {
            let config = config.with_output_format(args.format.into());
            handlers::analyze(&config, args)?
        }
        Commands::Fill(args) => {
            let config = config.with_output_format(args.format.into());
            handlers::fill(&config, args)?
        }
        Commands::Validate(args) => {
            let rendered = handlers::validate(args);
            if rendered.passed {
                printer.success(&rendered.body);
            } else {
                printer.failure(&rendered.body);
            }
            return Ok(rendered.passed);
        }
    };

    printer.report(&rendered.body)?;
    for warning in &rendered.warnings {
        printer.warning(warning);
    }
    Ok(rendered.passed)
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let color: ColorChoice = cli.color.into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_output_format(OutputFormat::Text)
}

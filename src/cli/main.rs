//! Image trim CLI tool
//!
//! Command-line interface that crops an image to the bounding box of its
//! visible pixels.

use super::config::CliConfigBuilder;
use crate::{
    error::{Result, TrimError},
    processor::TrimProcessor,
    tracing_config::{TracingConfig, TracingFormat},
    types::TrimOutcome,
};
use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

/// Trim transparent padding from an image
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "imgtrim")]
pub struct Cli {
    /// Image to trim
    #[arg(value_name = "INPUT_PATH")]
    pub input: PathBuf,

    /// Destination file; the output format follows its extension
    #[arg(value_name = "OUTPUT_PATH")]
    pub output: PathBuf,

    /// Pixels with alpha at or below this value count as padding (0-254)
    #[arg(long, default_value_t = crate::config::DEFAULT_ALPHA_THRESHOLD)]
    pub alpha_threshold: u8,

    /// Enable verbose logging on stderr (-v: INFO, -vv: DEBUG, -vvv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = CliLogFormat::Console)]
    pub log_format: CliLogFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum CliLogFormat {
    /// Colored, human-readable
    Console,
    /// Plain text without colors, for CI logs
    Compact,
    /// One JSON object per line
    #[cfg(feature = "tracing-json")]
    Json,
}

impl From<CliLogFormat> for TracingFormat {
    fn from(format: CliLogFormat) -> Self {
        match format {
            CliLogFormat::Console => TracingFormat::Console,
            CliLogFormat::Compact => TracingFormat::Compact,
            #[cfg(feature = "tracing-json")]
            CliLogFormat::Json => TracingFormat::Json,
        }
    }
}

/// One-line usage string printed on argument errors
pub fn usage() -> String {
    format!("Usage: {} <input_path> <output_path>", Cli::command().get_name())
}

pub fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(&err),
    };

    if let Err(e) = init_tracing(cli.verbose, cli.log_format.into()) {
        eprintln!("{e:#}");
    }

    debug!(?cli, "Parsed arguments");

    match run(&cli) {
        Ok(outcome) => {
            report_outcome(&outcome);
            ExitCode::SUCCESS
        },
        Err(e) => {
            debug!(error = ?e, "Trim failed");
            report_error(&e);
            ExitCode::FAILURE
        },
    }
}

fn handle_parse_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            // stdout may already be closed; the exit status still reports the outcome
            err.print().ok();
            ExitCode::SUCCESS
        },
        ErrorKind::MissingRequiredArgument => {
            println!("{}", usage());
            ExitCode::FAILURE
        },
        _ => {
            err.print().ok();
            println!("{}", usage());
            ExitCode::FAILURE
        },
    }
}

fn run(cli: &Cli) -> Result<TrimOutcome> {
    let config = CliConfigBuilder::from_cli(cli)?;
    info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        alpha_threshold = config.alpha_threshold,
        "Starting trim"
    );

    let processor = TrimProcessor::new(config)?;
    processor.trim_file(&cli.input, &cli.output)
}

fn report_outcome(outcome: &TrimOutcome) {
    match outcome {
        TrimOutcome::Cropped(report) => {
            println!(
                "Successfully cropped image. Original size: {}, New size: {}",
                report.original, report.trimmed
            );
            println!("Saved to: {}", report.output_path.display());
        },
        TrimOutcome::FullyTransparent { .. } => {
            println!("Image is completely transparent, nothing to crop.");
        },
    }
}

fn report_error(error: &TrimError) {
    match error {
        TrimError::InputNotFound(_) | TrimError::CodecUnavailable { .. } => println!("{error}"),
        other => println!("An error occurred: {other}"),
    }
}

/// Initialize tracing based on verbosity level; `RUST_LOG` takes precedence
fn init_tracing(verbose_count: u8, format: TracingFormat) -> anyhow::Result<()> {
    let mut config = TracingConfig::new()
        .with_verbosity(verbose_count)
        .with_format(format);
    if let Ok(filter) = std::env::var("RUST_LOG") {
        config = config.with_env_filter(filter);
    }

    config
        .init()
        .context("Failed to initialize tracing subscriber")
}

//! Roadnet - graph algorithms over a road network
//!
//! Runs traversals, shortest-path searches and minimum spanning tree
//! algorithms over the built-in French network or a TOML network file.

mod cli;
mod commands;
mod error;
mod format;
mod logging;
mod network;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use error::{ExitCode as RoadnetExitCode, RoadnetError};

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version are informational, not errors - let clap handle them
        Err(err) if !argv_format_json || is_informational(&err) => err.exit(),
        Err(err) => {
            // `--format json` was requested but parsing failed before `Cli.format`
            // could be read, so report through the structured envelope.
            let roadnet_error = parse_error(&err);
            eprintln!("{}", roadnet_error.to_json());
            return ExitCode::from(roadnet_error.exit_code() as u8);
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(RoadnetExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
    )
}

fn parse_error(err: &clap::Error) -> RoadnetError {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            RoadnetError::UsageError(err.to_string())
        }
        // Includes a repeated `--format`
        ErrorKind::ArgumentConflict => RoadnetError::DuplicateFormat,
        _ => RoadnetError::Other(err.to_string()),
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}

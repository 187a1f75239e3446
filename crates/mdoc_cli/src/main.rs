//! mdoc CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Marker not found in the declaration source file
//! - 3: Malformed declaration line
//! - 17: Documentation problems found (configurable)

use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mdoc_core::DocError;

mod commands;

use commands::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    // Logs go to stderr; stdout carries the diagnostics.
    let mut filter = EnvFilter::from_default_env().add_directive(LevelFilter::WARN.into());
    if let Ok(directive) = format!("mdoc={}", level).parse() {
        filter = filter.add_directive(directive);
    }
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if let Err(e) = log_result {
        eprintln!("Logging unavailable: {}", e);
    }

    match commands::run::execute(cli.run, cli.quiet) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            let exit_code = e
                .downcast_ref::<DocError>()
                .map_or(DocError::GENERAL_EXIT_CODE, DocError::exit_code);

            // Declaration-file errors are diagnostics like any other problem.
            if exit_code == DocError::GENERAL_EXIT_CODE {
                eprintln!("Error: {:#}", e);
            } else {
                println!("{}", e);
            }
            ExitCode::from(exit_code)
        }
    }
}

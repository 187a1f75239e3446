//! CLI argument definitions.
//!
//! The tool has a single mode of operation, so there are no subcommands:
//! running `mdoc` with no arguments checks and aggregates the documentation
//! of the current source tree.

use clap::Parser;

pub mod run;

/// mdoc - metric documentation checker
#[derive(Parser)]
#[command(name = "mdoc")]
#[command(version, about = "Check metric documentation and build the aggregate file")]
#[command(long_about = r#"
Reads the declared metric names from the source tree, checks that each one has
a YAML documentation file with the required attributes, and writes all parsed
documentation to a single aggregate file.

EXIT CODES:
  0  - Success
  1  - General error (unreadable directory, unwritable output, bad config)
  2  - Marker line not found in the declaration source file
  3  - Malformed or unterminated name list in the declaration source file
  17 - One or more documentation problems (the aggregate is still written)
"#)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(flatten)]
    pub run: run::RunArgs,
}

//! Run command - Validate documentation and write the aggregate.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use mdoc_core::{DocConfig, DocPipeline};

#[derive(Args)]
pub struct RunArgs {
    /// Source tree root (defaults to the current directory)
    #[arg(long, env = "MDOC_ROOT")]
    root: Option<PathBuf>,

    /// TOML configuration file overriding the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate only, do not write the aggregate file
    #[arg(long)]
    check: bool,

    /// List documentation files no declared metric refers to
    #[arg(long)]
    report_orphans: bool,
}

/// Execute a run and return the process exit code.
pub fn execute(args: RunArgs, quiet: bool) -> Result<u8> {
    let mut config = match &args.config {
        Some(path) => DocConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path))?,
        None => DocConfig::default(),
    };
    if let Some(root) = args.root {
        config = config.with_root(root);
    }

    info!("Checking metric documentation under {:?}", config.root);

    let mut pipeline = DocPipeline::new(config);
    if args.check {
        pipeline = pipeline.check_only();
    }
    if args.report_orphans {
        pipeline = pipeline.with_orphan_report();
    }

    let outcome = pipeline.run_with(|failure| println!("{}", failure))?;

    for orphan in &outcome.orphans {
        println!("Unreferenced metric documentation file '{}'", orphan);
    }

    if !quiet {
        println!("{}", outcome.summary());
    }

    Ok(outcome.exit_code())
}

//! The end-to-end documentation run.

use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use tracing::info;

use crate::config::DocConfig;
use crate::error::DocResult;
use crate::extractor::NameExtractor;
use crate::lister::DocLister;
use crate::models::DeclaredMetric;
use crate::validator::{DocFailure, DocValidator, ValidationReport};
use crate::writer::AggregateWriter;

/// Result of a completed run.
#[derive(Debug)]
pub struct RunOutcome {
    pub metrics: Vec<DeclaredMetric>,
    pub report: ValidationReport,
    /// Documentation files no declared metric refers to. Only filled when
    /// the orphan report is enabled.
    pub orphans: Vec<String>,
    /// Where the aggregate was written, if it was
    pub output_path: Option<PathBuf>,
    failure_exit_code: u8,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.report.valid
    }

    /// 0 on success, the configured failure code otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.success() {
            0
        } else {
            self.failure_exit_code
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} metrics declared, {} documented, {} problems",
            self.metrics.len(),
            self.report.aggregate.len(),
            self.report.failures.len()
        )
    }
}

/// Runs extraction, listing, validation and output in sequence.
///
/// Declaration-file errors are returned as `Err` before the documentation
/// directory is read. Documentation problems are collected in the outcome and
/// the aggregate is still written.
pub struct DocPipeline {
    config: DocConfig,
    write_output: bool,
    report_orphans: bool,
}

impl DocPipeline {
    pub fn new(config: DocConfig) -> Self {
        Self {
            config,
            write_output: true,
            report_orphans: false,
        }
    }

    /// Validate without writing the aggregate file.
    pub fn check_only(mut self) -> Self {
        self.write_output = false;
        self
    }

    pub fn with_orphan_report(mut self) -> Self {
        self.report_orphans = true;
        self
    }

    pub fn run(&self) -> DocResult<RunOutcome> {
        self.run_with(|_| {})
    }

    /// Run, calling `on_failure` as each documentation problem is found.
    pub fn run_with<F>(&self, on_failure: F) -> DocResult<RunOutcome>
    where
        F: FnMut(&DocFailure),
    {
        self.config.validate()?;

        let metrics = NameExtractor::from_config(&self.config).extract_file(self.config.source_path())?;
        let listing = DocLister::list(self.config.docs_path())?;

        let report = DocValidator::new(&self.config).validate_with(&metrics, &listing, on_failure);

        let output_path = if self.write_output {
            let path = self.config.output_path();
            AggregateWriter::write(&path, &report.aggregate)?;
            Some(path)
        } else {
            info!("Check mode, not writing {:?}", self.config.output_path());
            None
        };

        let orphans = if self.report_orphans {
            unreferenced_files(&self.config, &metrics, &listing)
        } else {
            Vec::new()
        };

        Ok(RunOutcome {
            metrics,
            report,
            orphans,
            output_path,
            failure_exit_code: self.config.failure_exit_code,
        })
    }
}

/// Documentation files in `listing` that no declared metric refers to.
///
/// Only names carrying the documentation suffix are considered, and the
/// aggregate output file is never reported.
pub fn unreferenced_files(
    config: &DocConfig,
    metrics: &[DeclaredMetric],
    listing: &BTreeSet<String>,
) -> Vec<String> {
    let referenced: HashSet<String> = metrics.iter().map(|m| config.doc_file_name(&m.name)).collect();

    listing
        .iter()
        .filter(|name| name.ends_with(&config.doc_suffix))
        .filter(|name| **name != config.output_file)
        .filter(|name| !referenced.contains(*name))
        .cloned()
        .collect()
}

//! Documentation validation and aggregation.

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use serde_yaml::Value;
use tracing::debug;

use crate::config::DocConfig;
use crate::models::{AggregateDocument, DeclaredMetric};
use crate::yaml::parse_document;

/// A problem with one metric's documentation. Never stops the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocFailure {
    /// No documentation file is listed for a declared metric.
    MissingDocumentation { metric: String },
    /// The documentation file was listed but could not be read.
    OpenFailure { path: PathBuf, message: String },
    /// The documentation file is not valid YAML.
    ParseFailure { path: PathBuf, message: String },
    /// The documentation file parsed but lacks a required key.
    MissingRequiredKey { path: PathBuf, key: String },
}

impl fmt::Display for DocFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocFailure::MissingDocumentation { metric } => {
                write!(f, "Missing metric documentation for metric '{}'", metric)
            }
            DocFailure::OpenFailure { path, message } => {
                write!(f, "Could not open file '{}': {}", path.display(), message)
            }
            DocFailure::ParseFailure { path, message } => {
                write!(
                    f,
                    "Could not parse YAML file '{}', error: {}",
                    path.display(),
                    message.replace('\n', " ")
                )
            }
            DocFailure::MissingRequiredKey { path, key } => {
                write!(
                    f,
                    "YAML file '{}' does not have required attribute '{}'",
                    path.display(),
                    key
                )
            }
        }
    }
}

/// Outcome of validating every declared metric.
#[derive(Debug)]
pub struct ValidationReport {
    pub valid: bool,
    pub declared: usize,
    pub aggregate: AggregateDocument,
    pub failures: Vec<DocFailure>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            valid: true,
            declared: 0,
            aggregate: AggregateDocument::new(),
            failures: Vec::new(),
        }
    }

    pub fn add_failure(&mut self, failure: DocFailure) {
        self.valid = false;
        self.failures.push(failure);
    }
}

/// Validates documentation files against the declared metric names and
/// collects the parsed documents.
///
/// A document enters the aggregate as soon as it parses. Required-key checks
/// run afterwards and never remove it again.
pub struct DocValidator<'a> {
    config: &'a DocConfig,
}

impl<'a> DocValidator<'a> {
    pub fn new(config: &'a DocConfig) -> Self {
        Self { config }
    }

    /// Validate all metrics, collecting failures silently.
    pub fn validate(&self, metrics: &[DeclaredMetric], listing: &BTreeSet<String>) -> ValidationReport {
        self.validate_with(metrics, listing, |_| {})
    }

    /// Validate all metrics, calling `on_failure` as each problem is found.
    pub fn validate_with<F>(
        &self,
        metrics: &[DeclaredMetric],
        listing: &BTreeSet<String>,
        mut on_failure: F,
    ) -> ValidationReport
    where
        F: FnMut(&DocFailure),
    {
        let mut report = ValidationReport::new();
        report.declared = metrics.len();

        let mut record = |report: &mut ValidationReport, failure: DocFailure| {
            debug!("{}", failure);
            on_failure(&failure);
            report.add_failure(failure);
        };

        for metric in metrics {
            let file_name = self.config.doc_file_name(&metric.name);
            if !listing.contains(&file_name) {
                record(
                    &mut report,
                    DocFailure::MissingDocumentation {
                        metric: metric.name.clone(),
                    },
                );
                continue;
            }

            let display_path = self.config.docs_dir.join(&file_name);
            let document = match self.load(&file_name) {
                Ok(bytes) => bytes,
                Err(message) => {
                    record(&mut report, DocFailure::OpenFailure { path: display_path, message });
                    continue;
                }
            };

            let doc = match parse_document(&document) {
                Ok(doc) => doc,
                Err(e) => {
                    record(
                        &mut report,
                        DocFailure::ParseFailure {
                            path: display_path,
                            message: e.to_string(),
                        },
                    );
                    continue;
                }
            };

            let missing = self.missing_keys(&doc);
            report.aggregate.push(doc);

            for key in missing {
                record(
                    &mut report,
                    DocFailure::MissingRequiredKey {
                        path: display_path.clone(),
                        key,
                    },
                );
            }
        }

        debug!(
            "Validated {} metrics: {} documented, {} problems",
            report.declared,
            report.aggregate.len(),
            report.failures.len()
        );
        report
    }

    /// Required keys absent from a parsed document, in configured order.
    ///
    /// A document that is not a mapping is missing every key.
    pub fn missing_keys(&self, doc: &Value) -> Vec<String> {
        self.config
            .required_keys
            .iter()
            .filter(|key| doc.get(key.as_str()).is_none())
            .cloned()
            .collect()
    }

    fn load(&self, file_name: &str) -> Result<Vec<u8>, String> {
        let path = self.config.docs_path().join(file_name);
        debug!("Reading documentation from {:?}", path);

        let mut file = File::open(&path).map_err(|e| e.to_string())?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| e.to_string())?;
        Ok(bytes)
    }
}

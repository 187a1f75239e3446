//! Checker configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DocError, DocResult};

/// Locations and conventions used by a documentation run.
///
/// The defaults describe the standard source tree layout, so a run with
/// `DocConfig::default()` needs no further setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    /// Root directory all other paths are relative to
    pub root: PathBuf,
    /// Source file holding the declared metric name list
    pub source_file: PathBuf,
    /// Directory holding one documentation file per metric
    pub docs_dir: PathBuf,
    /// Aggregate output file name, written inside `docs_dir`
    pub output_file: String,
    /// Substring of the line that opens the name list
    pub marker: String,
    /// Substring of the line that closes the name list
    pub sentinel: String,
    /// Suffix appended to a metric name to get its documentation file name
    pub doc_suffix: String,
    /// Keys every documentation file must define
    pub required_keys: Vec<String>,
    /// Exit code used when any documentation problem was found
    pub failure_exit_code: u8,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source_file: PathBuf::from("arangod/RestServer/Metrics.cpp"),
            docs_dir: PathBuf::from("Documentation/Metrics"),
            output_file: "allMetrics.yaml".to_string(),
            marker: "metricsNameList".to_string(),
            sentinel: "nullptr".to_string(),
            doc_suffix: ".yaml".to_string(),
            required_keys: ["name", "help", "exposedBy", "description"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            failure_exit_code: 17,
        }
    }
}

impl DocConfig {
    /// Load a configuration from a TOML file. Keys absent from the file keep
    /// their default values.
    pub fn load(path: impl AsRef<Path>) -> DocResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {:?}", path);

        let content = fs::read_to_string(path)?;
        let config: DocConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make a run meaningless.
    pub fn validate(&self) -> DocResult<()> {
        if self.marker.is_empty() {
            return Err(DocError::InvalidConfig("marker cannot be empty".to_string()));
        }
        if self.sentinel.is_empty() {
            return Err(DocError::InvalidConfig("sentinel cannot be empty".to_string()));
        }
        if self.doc_suffix.is_empty() {
            return Err(DocError::InvalidConfig("doc_suffix cannot be empty".to_string()));
        }
        if self.output_file.is_empty() {
            return Err(DocError::InvalidConfig("output_file cannot be empty".to_string()));
        }
        match self.failure_exit_code {
            0 | DocError::GENERAL_EXIT_CODE
            | DocError::MARKER_NOT_FOUND_EXIT_CODE
            | DocError::MALFORMED_DECLARATION_EXIT_CODE => Err(DocError::InvalidConfig(format!(
                "failure_exit_code {} collides with a reserved exit code",
                self.failure_exit_code
            ))),
            _ => Ok(()),
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_source_file(mut self, source_file: impl Into<PathBuf>) -> Self {
        self.source_file = source_file.into();
        self
    }

    pub fn with_docs_dir(mut self, docs_dir: impl Into<PathBuf>) -> Self {
        self.docs_dir = docs_dir.into();
        self
    }

    pub fn with_output_file(mut self, output_file: impl Into<String>) -> Self {
        self.output_file = output_file.into();
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    /// Full path of the declaration source file.
    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.source_file)
    }

    /// Full path of the documentation directory.
    pub fn docs_path(&self) -> PathBuf {
        self.root.join(&self.docs_dir)
    }

    /// Full path of the aggregate output file.
    pub fn output_path(&self) -> PathBuf {
        self.docs_path().join(&self.output_file)
    }

    /// Documentation file name for a metric, e.g. `foo_total.yaml`.
    pub fn doc_file_name(&self, metric: &str) -> String {
        format!("{}{}", metric, self.doc_suffix)
    }
}

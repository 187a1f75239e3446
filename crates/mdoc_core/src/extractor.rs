//! Extraction of declared metric names from the declaration source file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::config::DocConfig;
use crate::error::{DocError, DocResult};
use crate::models::DeclaredMetric;

/// Reads the quoted metric names between a marker line and a sentinel line.
///
/// The source is scanned until a line contains the marker. Every following
/// line up to (not including) the first line containing the sentinel must hold
/// a quoted name; the text between its first two `"` characters is taken as
/// the metric name. Duplicates are kept.
#[derive(Debug, Clone)]
pub struct NameExtractor {
    marker: String,
    sentinel: String,
}

impl NameExtractor {
    pub fn new(marker: impl Into<String>, sentinel: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            sentinel: sentinel.into(),
        }
    }

    pub fn from_config(config: &DocConfig) -> Self {
        Self::new(config.marker.clone(), config.sentinel.clone())
    }

    /// Extract the declared names from a file on disk.
    pub fn extract_file(&self, path: impl AsRef<Path>) -> DocResult<Vec<DeclaredMetric>> {
        let path = path.as_ref();
        debug!("Reading metric declarations from {:?}", path);

        let file = File::open(path)?;
        let metrics = self.extract(BufReader::new(file), path)?;

        info!("Found {} declared metrics in {:?}", metrics.len(), path);
        Ok(metrics)
    }

    /// Extract the declared names from any buffered reader. `origin` is only
    /// used in error messages.
    pub fn extract<R: BufRead>(&self, reader: R, origin: &Path) -> DocResult<Vec<DeclaredMetric>> {
        let mut lines = reader.lines().enumerate();

        loop {
            match lines.next() {
                Some((_, line)) => {
                    if line?.contains(&self.marker) {
                        break;
                    }
                }
                None => {
                    return Err(DocError::MarkerNotFound {
                        path: origin.to_path_buf(),
                        marker: self.marker.clone(),
                    })
                }
            }
        }

        let mut metrics = Vec::new();
        for (index, line) in lines {
            let line = line?;
            if line.contains(&self.sentinel) {
                return Ok(metrics);
            }

            let line_number = index + 1;
            let Some(name) = quoted_name(&line).map(str::to_string) else {
                return Err(DocError::MalformedDeclarationLine { line_number, line });
            };
            metrics.push(DeclaredMetric::new(name, line_number));
        }

        Err(DocError::UnterminatedNameList {
            path: origin.to_path_buf(),
            sentinel: self.sentinel.clone(),
        })
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::from_config(&DocConfig::default())
    }
}

/// Text between the first and second double quote of a line.
fn quoted_name(line: &str) -> Option<&str> {
    let start = line.find('"')? + 1;
    let len = line[start..].find('"')?;
    Some(&line[start..start + len])
}

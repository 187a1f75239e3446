//! Aggregate output writing.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::DocResult;
use crate::models::AggregateDocument;

/// Writer for the combined documentation file.
pub struct AggregateWriter;

impl AggregateWriter {
    /// Serialize the aggregate as a YAML sequence.
    pub fn render(aggregate: &AggregateDocument) -> DocResult<String> {
        Ok(serde_yaml::to_string(aggregate)?)
    }

    /// Write the aggregate to `path`, replacing any previous content.
    pub fn write(path: impl AsRef<Path>, aggregate: &AggregateDocument) -> DocResult<()> {
        let path = path.as_ref();
        let content = Self::render(aggregate)?;
        fs::write(path, content)?;

        info!("Wrote {} metric documents to {:?}", aggregate.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_overwrites_previous_content() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("allMetrics.yaml");
        fs::write(&path, "stale: content\nfrom: last run\n").unwrap();

        let mut aggregate = AggregateDocument::new();
        aggregate.push(serde_yaml::from_str("name: fresh").unwrap());
        AggregateWriter::write(&path, &aggregate).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("name: fresh"));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn test_render_keeps_key_order() {
        let mut aggregate = AggregateDocument::new();
        aggregate.push(serde_yaml::from_str("name: z\nhelp: h\nexposedBy: [agent]").unwrap());

        let rendered = AggregateWriter::render(&aggregate).unwrap();
        let name_at = rendered.find("name:").unwrap();
        let help_at = rendered.find("help:").unwrap();
        let exposed_at = rendered.find("exposedBy:").unwrap();

        assert!(name_at < help_at && help_at < exposed_at);
    }
}

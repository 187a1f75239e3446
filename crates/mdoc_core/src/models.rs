//! Data models for declared metrics and their documentation.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// A metric name as listed in the declaration source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredMetric {
    /// Text between the first two double quotes of the declaring line
    pub name: String,
    /// 1-based line number in the source file
    pub line_number: usize,
}

impl DeclaredMetric {
    pub fn new(name: impl Into<String>, line_number: usize) -> Self {
        Self {
            name: name.into(),
            line_number,
        }
    }
}

/// Ordered collection of every documentation file that parsed successfully.
///
/// Entries keep declaration order. Serializes as a plain YAML sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregateDocument {
    entries: Vec<Value>,
}

impl AggregateDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Value) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values of the `name` key of every mapping entry, in order.
    pub fn names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| entry.get("name").and_then(Value::as_str))
            .collect()
    }
}

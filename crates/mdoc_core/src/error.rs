//! Error types for the documentation checker.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for documentation operations.
pub type DocResult<T> = Result<T, DocError>;

/// Fatal errors that stop a run.
///
/// Problems with individual documentation files are not errors; they are
/// collected as [`crate::validator::DocFailure`] values instead.
#[derive(Error, Debug)]
pub enum DocError {
    #[error("Did not find {marker} in {path}!")]
    MarkerNotFound { path: PathBuf, marker: String },

    #[error("Did not find quoted name in this line:\n{line}")]
    MalformedDeclarationLine { line_number: usize, line: String },

    #[error("Name list in {path} ends before {sentinel} was found")]
    UnterminatedNameList { path: PathBuf, sentinel: String },

    #[error("Documentation directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl DocError {
    /// General failure not tied to the declaration file.
    pub const GENERAL_EXIT_CODE: u8 = 1;
    pub const MARKER_NOT_FOUND_EXIT_CODE: u8 = 2;
    pub const MALFORMED_DECLARATION_EXIT_CODE: u8 = 3;

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DocError::MarkerNotFound { .. } => Self::MARKER_NOT_FOUND_EXIT_CODE,
            DocError::MalformedDeclarationLine { .. } | DocError::UnterminatedNameList { .. } => {
                Self::MALFORMED_DECLARATION_EXIT_CODE
            }
            _ => Self::GENERAL_EXIT_CODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let marker = DocError::MarkerNotFound {
            path: PathBuf::from("src/Metrics.cpp"),
            marker: "metricsNameList".to_string(),
        };
        assert_eq!(marker.exit_code(), 2);

        let malformed = DocError::MalformedDeclarationLine {
            line_number: 4,
            line: "  \"broken,".to_string(),
        };
        assert_eq!(malformed.exit_code(), 3);

        let unterminated = DocError::UnterminatedNameList {
            path: PathBuf::from("src/Metrics.cpp"),
            sentinel: "nullptr".to_string(),
        };
        assert_eq!(unterminated.exit_code(), 3);

        let missing_dir = DocError::DirectoryNotFound(PathBuf::from("Documentation/Metrics"));
        assert_eq!(missing_dir.exit_code(), 1);
    }

    #[test]
    fn test_marker_message_names_marker_and_file() {
        let err = DocError::MarkerNotFound {
            path: PathBuf::from("arangod/RestServer/Metrics.cpp"),
            marker: "metricsNameList".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Did not find metricsNameList in arangod/RestServer/Metrics.cpp!"
        );
    }
}

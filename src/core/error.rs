//! Error types for the detection pipeline.
//!
//! Only two failures are real errors. A source file that cannot be read or
//! parsed (`SourceError`) is recovered per file by the collector. A route file
//! pattern that cannot be expanded (`DiscoveryError`) aborts the whole pass,
//! since there is nothing to detect without a file list.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::data::FileWarning;

/// A source file that could not be turned into a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse {file_path}: {message}")]
pub struct ParseError {
    pub file_path: String,
    pub message: String,
}

/// Per-file failure inside a detection pass.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {file_path}: {source}")]
    Read {
        file_path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SourceError {
    pub fn file_path(&self) -> &str {
        match self {
            SourceError::Read { file_path, .. } => file_path,
            SourceError::Parse(err) => &err.file_path,
        }
    }
}

impl From<SourceError> for FileWarning {
    fn from(err: SourceError) -> Self {
        FileWarning {
            file_path: err.file_path().to_string(),
            message: err.to_string(),
        }
    }
}

/// Failure to enumerate route files.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Invalid route file pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("Cannot access project root {}: {source}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

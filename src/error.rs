//! Error types for runviz operations.

use thiserror::Error;

/// Errors that can occur while parsing a CSV artifact.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The CSV stream was malformed; no partial dataset is returned.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error while reading artifact text.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking parser task was aborted before completing.
    #[error("parser task aborted before completion")]
    TaskAborted,
}

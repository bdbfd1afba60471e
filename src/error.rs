//! Error types for label-noise injection.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for labelnoise operations.
pub type Result<T> = std::result::Result<T, LabelNoiseError>;

/// Errors that can occur while building, sampling or applying label noise.
#[derive(Error, Debug)]
pub enum LabelNoiseError {
    /// Class count below two, or a noise rate outside `[0, 1]`.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The requested noise topology is not one of `pairflip` or `symmetric`.
    #[error("Unsupported noise type: {0}")]
    UnsupportedTopology(String),
    /// The transition matrix or the label vector failed a precondition check.
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// A positive noise rate produced no flipped labels.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    /// Malformed user input (label files, command-line values).
    #[error("Invalid input data: {0}")]
    InvalidInput(String),
    /// Not a valid boolean string.
    #[error("Not a valid boolean string: {0:?}")]
    InvalidBoolean(String),
    /// A file on disk does not match its expected checksum.
    #[error("Checksum mismatch for {}: expected {expected}, got {actual}", path.display())]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },
    /// A network error while fetching a dataset file.
    #[error("Download error: {0}")]
    DownloadError(String),
    /// An IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// A serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<std::io::Error> for LabelNoiseError {
    fn from(err: std::io::Error) -> Self {
        LabelNoiseError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for LabelNoiseError {
    fn from(err: serde_json::Error) -> Self {
        LabelNoiseError::SerializationError(err.to_string())
    }
}

#[cfg(feature = "download")]
impl From<reqwest::Error> for LabelNoiseError {
    fn from(err: reqwest::Error) -> Self {
        LabelNoiseError::DownloadError(err.to_string())
    }
}

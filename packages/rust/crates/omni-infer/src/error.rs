//! Error types for metadata inference.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.

use std::error::Error as _;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::driver::USAGE;

/// Errors raised while reading a text source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// File does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Content is not valid UTF-8.
    #[error("UTF-8 decoding error")]
    Encoding,

    /// Low-level I/O error from std::io.
    #[error("IO error: {0}")]
    System(#[from] std::io::Error),
}

/// Terminal failures of a single inference run.
///
/// Every variant maps to exit status 1 and an [`ErrorPayload`] on stderr.
#[derive(Debug, Error)]
pub enum InferError {
    /// Wrong number of positional arguments.
    #[error("Invalid arguments")]
    Usage,

    /// The text source could not be read.
    #[error("Read failed: {0}")]
    Read(#[from] SourceError),

    /// The catalog is not valid JSON.
    #[error("JSON parse failed: {0}")]
    CatalogParse(#[source] serde_json::Error),

    /// The catalog lacks one or more required keys.
    #[error("Missing keys: {}", .0.join(", "))]
    MissingKeys(Vec<&'static str>),

    /// A required catalog key is present but is not an array of strings.
    #[error("Invalid catalog key '{key}': {source}")]
    InvalidKey {
        /// Offending key (`tags`, `steps` or `kinds`).
        key: &'static str,
        /// Deserialization failure for that key.
        #[source]
        source: serde_json::Error,
    },
}

impl InferError {
    /// Build the structured payload written to stderr.
    #[must_use]
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            error: self.to_string(),
            cause: self.source().map(ToString::to_string),
            usage: matches!(self, Self::Usage).then(|| USAGE.to_string()),
        }
    }
}

/// JSON error object: `{"error": ..., "cause": ..., "usage": ...}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorPayload {
    /// One-line diagnostic.
    pub error: String,
    /// Underlying cause for read and catalog failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    /// Usage line, only for argument errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

impl ErrorPayload {
    /// Payload for failures outside the [`InferError`] taxonomy (e.g. stdout faults).
    #[must_use]
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            cause: None,
            usage: None,
        }
    }
}

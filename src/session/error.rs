//! Error types for session loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a session file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be read.
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not a supported session format.
    #[error("unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// A line could not be parsed as a JSON message.
    #[error("failed to parse JSON at line {line}: {message}")]
    Json { line: usize, message: String },

    /// A message has an invalid field value.
    #[error("invalid value for {field} at line {line}: {message}")]
    InvalidValue {
        field: String,
        line: usize,
        message: String,
    },
}

impl ParseError {
    /// Create an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Create a JSON parsing error.
    pub fn json(line: usize, message: impl Into<String>) -> Self {
        Self::Json {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(
        field: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            line,
            message: message.into(),
        }
    }
}

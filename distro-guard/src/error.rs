//! Error types for the distro-guard validation library.
//!
//! Validation findings are never surfaced as errors; they travel as
//! [`Violation`](crate::core::Violation) values. The variants here cover the
//! only hard failure modes a run has: unreadable input and a failing
//! diagnostic writer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Errors produced while running a file validation.
#[derive(Debug, Error)]
pub enum GuardError {
    /// The input file could not be opened or read.
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        /// The file that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader reported a structural problem with the input.
    #[error("failed to read CSV data from `{origin}`: {source}")]
    Csv {
        /// A human-readable name for the input (usually the file path).
        origin: String,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Writing a diagnostic line failed.
    #[error("failed to write diagnostics: {0}")]
    Diagnostics(#[from] std::io::Error),

    /// Serializing a report failed.
    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GuardError {
    /// Creates an I/O error bound to the file it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a CSV error bound to the input it concerns.
    pub fn csv(origin: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            origin: origin.into(),
            source,
        }
    }
}

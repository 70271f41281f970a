use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the helio workspace.
///
/// This wraps merge configuration problems, column validation failures,
/// source-tagged load failures, and not-found conditions.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HelioError {
    /// The merge request itself is unusable (too few sources, no derivable
    /// window, inverted window).
    #[error("invalid configuration: {msg}")]
    Config {
        /// Human-readable description of the configuration problem.
        msg: String,
    },

    /// A column-level precondition failed (name collision, missing input).
    #[error("validation failed: {msg}")]
    Validation {
        /// Human-readable description of the validation failure.
        msg: String,
    },

    /// Issues with returned or expected data (malformed rows, bad lengths).
    #[error("data issue: {0}")]
    Data(String),

    /// An individual source failed while loading or decoding.
    #[error("{name} failed: {msg}")]
    Source {
        /// Source name that failed.
        name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource (file, partition, column) could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "column f107".
        what: String,
    },

    /// The requested operation is not implemented by the target source.
    #[error("unsupported operation: {operation}")]
    Unsupported {
        /// Operation string describing what was requested (e.g. "load_file").
        operation: String,
    },
}

impl HelioError {
    /// Helper: build a `Config` error from a message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config { msg: msg.into() }
    }

    /// Helper: build a `Validation` error from a message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation { msg: msg.into() }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            name: name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `Unsupported` error for an operation string.
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Not-found conditions are benign (a source simply has nothing to offer);
    /// everything else indicates a caller or data problem.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}

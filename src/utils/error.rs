//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors returned by the collection and pair-extraction operations
///
/// Every operation either returns a complete result or one of these;
/// there are no partial results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollectionError {
    #[error("input must be either a map or a record, found {found}")]
    InvalidInputKind { found: &'static str },

    #[error("value must be numeric: key '{key}' holds {kind}")]
    NonNumericValue { key: String, kind: &'static str },

    #[error("input must be a non-nil map")]
    NilInput,

    #[error("invalid JSON input: {0}")]
    InvalidJson(String),
}

/// Errors that can occur while rendering or reading JSON
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid input path: {0}")]
    InvalidPath(String),
}

//! Error types for the dataset verifier.

use thiserror::Error;

/// Errors that can occur while verifying emitted files.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema error.
    #[error("Schema error: {0}")]
    Schema(#[from] engagement_core::SchemaError),

    /// The tabular file carries an unexpected header row.
    #[error("Unexpected CSV header: expected {expected:?}, found {found:?}")]
    HeaderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A row that cannot be parsed as a post record.
    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: u64, message: String },

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(String),
}

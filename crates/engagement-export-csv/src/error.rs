//! Error types for the CSV exporter.

use thiserror::Error;

/// Errors that can occur while writing the tabular output.
#[derive(Error, Debug)]
pub enum CsvExportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Schema-related error.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(String),
}

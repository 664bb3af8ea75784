//! CSV exporter for the mock engagement dataset.
//!
//! This crate writes the generated records as a flat table: one header row
//! with the six column names, one data row per record.
//!
//! # Example
//!
//! ```ignore
//! use engagement_core::DatasetSchema;
//! use engagement_export_csv::CsvExporter;
//!
//! let mut exporter = CsvExporter::new(DatasetSchema::default(), 42);
//! let metrics = exporter.export("mock_social_media_data.csv", 200)?;
//! ```

mod error;
mod exporter;

pub use error::CsvExportError;
pub use exporter::{CsvExporter, DEFAULT_BUFFER_SIZE};

//! JSON exporter for the mock engagement dataset.
//!
//! This crate writes the generated records as a single JSON array of
//! objects, one per record, keyed by the dataset column names with dates in
//! RFC 3339 timestamp form.
//!
//! # Example
//!
//! ```ignore
//! use engagement_core::DatasetSchema;
//! use engagement_export_json::JsonExporter;
//!
//! let mut exporter = JsonExporter::new(DatasetSchema::default(), 42);
//! let metrics = exporter.export("mock_social_media_data.json", 200)?;
//! ```

mod error;
mod exporter;

pub use error::JsonExportError;
pub use exporter::{JsonExporter, DEFAULT_BUFFER_SIZE};

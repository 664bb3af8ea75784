//! Mock social-media engagement dataset tool.
//!
//! Generates a randomized engagement dataset (post id, category, likes,
//! shares, comments, posting date) from a `DatasetSchema` and serializes it
//! as a CSV table and a JSON record array, with a verifier for the emitted
//! pair.
//!
//! # CLI Usage
//!
//! ```bash
//! # Write mock_social_media_data.csv and .json to the current directory
//! social-dataset generate
//!
//! # Deterministic dataset from a custom schema
//! social-dataset generate --schema engagement.yaml --seed 42 --output-dir data
//!
//! # Check an emitted pair
//! social-dataset verify --csv data/mock_social_media_data.csv \
//!   --json data/mock_social_media_data.json --seed 42
//! ```

use std::path::Path;

// Re-export the dataset crates for library use
pub use engagement_core::{
    CounterRange, DatasetSchema, DateWindow, EngagementProfile, PostRecord, PostType, SchemaError,
};
pub use engagement_export::{CommonExportArgs, ExportMetrics};
pub use engagement_export_csv::CsvExporter;
pub use engagement_export_json::JsonExporter;
pub use engagement_generator::RecordGenerator;
pub use engagement_verify::{DatasetVerifier, VerificationReport, VerifyArgs};

/// Load a schema file, or fall back to the built-in dataset schema.
pub fn load_schema(path: Option<&Path>) -> Result<DatasetSchema, SchemaError> {
    match path {
        Some(path) => DatasetSchema::from_file(path),
        None => Ok(DatasetSchema::default()),
    }
}

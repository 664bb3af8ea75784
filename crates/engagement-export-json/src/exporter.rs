//! JSON exporter implementation.

use crate::error::JsonExportError;
use engagement_core::DatasetSchema;
use engagement_export::ExportMetrics;
use engagement_generator::RecordGenerator;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Default buffer size for JSON writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// JSON exporter that writes the generated dataset as one array of records.
pub struct JsonExporter {
    schema: DatasetSchema,
    generator: RecordGenerator,
}

impl JsonExporter {
    /// Create a new seeded JSON exporter.
    ///
    /// # Arguments
    ///
    /// * `schema` - Dataset schema defining categories, ranges, and window
    /// * `seed` - Random seed for deterministic generation
    pub fn new(schema: DatasetSchema, seed: u64) -> Self {
        let generator = RecordGenerator::new(schema.clone(), seed);
        Self { schema, generator }
    }

    /// Create an exporter whose generator is seeded from OS entropy.
    pub fn unseeded(schema: DatasetSchema) -> Self {
        let generator = RecordGenerator::unseeded(schema.clone());
        Self { schema, generator }
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    /// Generate `count` records and write them to `output_path` as a JSON
    /// array of objects keyed by the dataset column names.
    ///
    /// Creates or overwrites the file. Filesystem failures surface directly;
    /// nothing is retried.
    ///
    /// # Returns
    ///
    /// Metrics about the export operation.
    pub fn export<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<ExportMetrics, JsonExportError> {
        let start_time = Instant::now();
        let mut metrics = ExportMetrics::default();

        self.schema
            .validate()
            .map_err(|e| JsonExportError::Schema(e.to_string()))?;

        let output_path = output_path.as_ref();
        info!(
            "Writing JSON file '{}' with {} records",
            output_path.display(),
            count
        );

        // Generate the record sequence
        let gen_start = Instant::now();
        let mut records = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let record = self
                .generator
                .next_record()
                .map_err(|e| JsonExportError::Generator(e.to_string()))?;
            records.push(record);
        }
        metrics.records_written = records.len() as u64;
        metrics.generation_duration = gen_start.elapsed();

        // Write the array in one pass
        let write_start = Instant::now();
        let file = File::create(output_path)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        serde_json::to_writer(&mut writer, &records)?;
        writeln!(writer)?;
        writer.flush()?;
        drop(writer);
        metrics.write_duration = write_start.elapsed();

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "JSON export complete: {} records, {} bytes in {:?} ({:.2} records/sec)",
            metrics.records_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use engagement_core::PostRecord;
    use tempfile::TempDir;

    #[test]
    fn test_export_json() {
        let schema = DatasetSchema::default();
        let mut exporter = JsonExporter::new(schema, 42);

        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("test.json");

        let metrics = exporter.export(&output_path, 10).unwrap();

        assert_eq!(metrics.records_written, 10);
        assert!(output_path.exists());

        // The file holds one JSON array of record objects
        let content = std::fs::read_to_string(&output_path).unwrap();
        let values: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(values.len(), 10);

        for (i, value) in values.iter().enumerate() {
            let obj = value.as_object().unwrap();
            for column in PostRecord::COLUMNS {
                assert!(obj.contains_key(column), "missing key {column}");
            }
            assert_eq!(obj.get("Post_ID").unwrap().as_u64().unwrap(), i as u64 + 1);

            // Dates render as RFC 3339 timestamps
            let date = obj.get("Date_Posted").unwrap().as_str().unwrap();
            assert!(DateTime::parse_from_rfc3339(date).is_ok());
        }
    }

    #[test]
    fn test_export_round_trips_records() {
        let schema = DatasetSchema::default();
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("test.json");

        let mut exporter = JsonExporter::new(schema.clone(), 42);
        exporter.export(&output_path, 10).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let records: Vec<PostRecord> = serde_json::from_str(&content).unwrap();

        // Same seed regenerates the same records
        let mut generator = RecordGenerator::new(schema, 42);
        let expected: Vec<_> = generator.records(10).unwrap().collect();
        assert_eq!(records, expected);
    }

    #[test]
    fn test_deterministic_export() {
        let schema = DatasetSchema::default();
        let temp_dir = TempDir::new().unwrap();

        let mut exp1 = JsonExporter::new(schema.clone(), 42);
        let path1 = temp_dir.path().join("test1.json");
        exp1.export(&path1, 5).unwrap();

        let mut exp2 = JsonExporter::new(schema, 42);
        let path2 = temp_dir.path().join("test2.json");
        exp2.export(&path2, 5).unwrap();

        // Files should be identical
        let content1 = std::fs::read_to_string(&path1).unwrap();
        let content2 = std::fs::read_to_string(&path2).unwrap();
        assert_eq!(content1, content2);
    }

    #[test]
    fn test_invalid_schema_is_rejected() {
        let schema = DatasetSchema {
            profiles: vec![],
            ..DatasetSchema::default()
        };
        let mut exporter = JsonExporter::new(schema, 42);

        let temp_dir = TempDir::new().unwrap();
        let result = exporter.export(temp_dir.path().join("test.json"), 10);
        assert!(matches!(result, Err(JsonExportError::Schema(_))));
    }
}

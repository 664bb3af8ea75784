//! CSV exporter implementation.

use crate::error::CsvExportError;
use csv::Writer;
use engagement_core::{DatasetSchema, PostRecord};
use engagement_export::ExportMetrics;
use engagement_generator::RecordGenerator;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// CSV exporter that writes the generated dataset as a flat table.
pub struct CsvExporter {
    schema: DatasetSchema,
    generator: RecordGenerator,
    include_header: bool,
}

impl CsvExporter {
    /// Create a new seeded CSV exporter.
    ///
    /// # Arguments
    ///
    /// * `schema` - Dataset schema defining categories, ranges, and window
    /// * `seed` - Random seed for deterministic generation
    pub fn new(schema: DatasetSchema, seed: u64) -> Self {
        let generator = RecordGenerator::new(schema.clone(), seed);
        Self {
            schema,
            generator,
            include_header: true,
        }
    }

    /// Create an exporter whose generator is seeded from OS entropy.
    pub fn unseeded(schema: DatasetSchema) -> Self {
        let generator = RecordGenerator::unseeded(schema.clone());
        Self {
            schema,
            generator,
            include_header: true,
        }
    }

    /// Set whether to include the header row in the output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    /// Generate `count` records and write them to `output_path`.
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
    ) -> Result<ExportMetrics, CsvExportError> {
        let start_time = Instant::now();
        let mut metrics = ExportMetrics::default();

        self.schema
            .validate()
            .map_err(|e| CsvExportError::Schema(e.to_string()))?;

        let output_path = output_path.as_ref();
        info!(
            "Writing CSV file '{}' with {} records",
            output_path.display(),
            count
        );

        // Create writer
        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        // Write header if requested
        if self.include_header {
            let write_start = Instant::now();
            writer.write_record(PostRecord::COLUMNS)?;
            write_time += write_start.elapsed();
        }

        // Generate and write records
        for _ in 0..count {
            let gen_start = Instant::now();
            let record = self
                .generator
                .next_record()
                .map_err(|e| CsvExportError::Generator(e.to_string()))?;
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            writer.write_record(record_to_csv_row(&record))?;
            write_time += write_start.elapsed();

            metrics.records_written += 1;

            if metrics.records_written % 10000 == 0 {
                debug!("Written {} records", metrics.records_written);
            }
        }

        // Flush and get file size
        writer.flush()?;
        let inner = writer
            .into_inner()
            .map_err(|e| CsvExportError::Io(std::io::Error::other(e.to_string())))?;
        drop(inner);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "CSV export complete: {} records, {} bytes in {:?} ({:.2} records/sec)",
            metrics.records_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }
}

/// Convert a record to a CSV row in column order; dates render as
/// `YYYY-MM-DD`.
fn record_to_csv_row(record: &PostRecord) -> Vec<String> {
    vec![
        record.post_id.to_string(),
        record.post_type.to_string(),
        record.likes.to_string(),
        record.shares.to_string(),
        record.comments.to_string(),
        record.date_posted.format("%Y-%m-%d").to_string(),
    ]
}

//! Command-line interface for social-dataset
//!
//! # Usage Examples
//!
//! ```bash
//! # Default run: 200 records into ./mock_social_media_data.{csv,json}
//! social-dataset generate
//!
//! # Deterministic generation with a custom schema and output directory
//! social-dataset generate \
//!   --schema engagement.yaml \
//!   --record-count 500 \
//!   --seed 42 \
//!   --output-dir data
//!
//! # Verify an emitted pair against the schema and the generating seed
//! social-dataset verify \
//!   --csv data/mock_social_media_data.csv \
//!   --json data/mock_social_media_data.json \
//!   --record-count 500 --seed 42
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use engagement_export::CommonExportArgs;
use engagement_export_csv::CsvExporter;
use engagement_export_json::JsonExporter;
use engagement_verify::{DatasetVerifier, VerifyArgs};
use rand::Rng;
use social_dataset::load_schema;
use std::path::PathBuf;

/// File stem shared by both outputs.
const OUTPUT_BASENAME: &str = "mock_social_media_data";

#[derive(Parser)]
#[command(name = "social-dataset")]
#[command(about = "A tool for generating mock social-media engagement datasets")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the dataset and write the CSV and JSON outputs
    Generate {
        /// Directory to write the output files into
        #[arg(long, short = 'o', default_value = ".")]
        output_dir: PathBuf,

        #[command(flatten)]
        common: CommonExportArgs,
    },

    /// Verify an emitted CSV/JSON pair against the schema
    Verify {
        #[command(flatten)]
        args: VerifyArgs,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { output_dir, common } => run_generate(output_dir, common),
        Commands::Verify { args } => run_verify(args),
    }
}

/// Run the generate command.
///
/// One resolved seed feeds both exporters so the two files always describe
/// the same records, whether the run was seeded explicitly or not.
fn run_generate(output_dir: PathBuf, common: CommonExportArgs) -> anyhow::Result<()> {
    let schema = load_schema(common.schema.as_deref())
        .with_context(|| format!("Failed to load schema from {:?}", common.schema))?;
    schema.validate().context("Invalid dataset schema")?;

    let seed = common
        .seed
        .or(schema.seed)
        .unwrap_or_else(|| rand::thread_rng().gen());

    tracing::info!("Generating {} records (seed={})", common.record_count, seed);

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory {output_dir:?}"))?;

    let csv_path = output_dir.join(format!("{OUTPUT_BASENAME}.csv"));
    let mut csv_exporter = CsvExporter::new(schema.clone(), seed);
    let metrics = csv_exporter
        .export(&csv_path, common.record_count)
        .with_context(|| format!("Failed to write {csv_path:?}"))?;
    tracing::info!(
        "Generated {:?}: {} records in {:?}",
        csv_path,
        metrics.records_written,
        metrics.total_duration
    );

    let json_path = output_dir.join(format!("{OUTPUT_BASENAME}.json"));
    let mut json_exporter = JsonExporter::new(schema, seed);
    let metrics = json_exporter
        .export(&json_path, common.record_count)
        .with_context(|| format!("Failed to write {json_path:?}"))?;
    tracing::info!(
        "Generated {:?}: {} records in {:?}",
        json_path,
        metrics.records_written,
        metrics.total_duration
    );

    println!("Mock dataset created with {} samples.", common.record_count);

    Ok(())
}

/// Run the verify command and fail on a non-clean report.
fn run_verify(args: VerifyArgs) -> anyhow::Result<()> {
    let schema = load_schema(args.schema.as_deref())
        .with_context(|| format!("Failed to load schema from {:?}", args.schema))?;

    let mut verifier = DatasetVerifier::new(schema).context("Invalid dataset schema")?;
    if let Some(seed) = args.seed {
        verifier = verifier.with_expected_seed(seed);
    }

    let report = verifier
        .verify(&args.csv, &args.json, args.record_count)
        .context("Verification failed to run")?;

    if report.is_success() {
        tracing::info!(
            "Verified {} records: tabular and structured outputs agree",
            report.matched
        );
        Ok(())
    } else {
        for violation in &report.violations {
            tracing::error!("Post {}: {}", violation.post_id, violation.message);
        }
        for mismatch in &report.mismatches {
            tracing::error!(
                "Post {}: {} differs ({} vs {})",
                mismatch.post_id,
                mismatch.field,
                mismatch.expected,
                mismatch.actual
            );
        }
        Err(anyhow::anyhow!(
            "Verification failed: {} mismatches, {} violations",
            report.mismatches.len(),
            report.violations.len()
        ))
    }
}

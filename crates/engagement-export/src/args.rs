//! Common CLI argument definitions shared by dataset-producing commands.

use clap::Args;
use std::path::PathBuf;

/// Common arguments shared by dataset-producing commands.
#[derive(Args, Clone, Debug)]
pub struct CommonExportArgs {
    /// Path to a schema YAML file (omit to use the built-in schema)
    #[arg(long, short = 's')]
    pub schema: Option<PathBuf>,

    /// Number of records to generate
    #[arg(long, default_value = "200")]
    pub record_count: u64,

    /// Random seed for deterministic generation (same seed = same data);
    /// falls back to the schema seed, then to OS entropy
    #[arg(long)]
    pub seed: Option<u64>,
}

//! CLI argument definitions for the dataset verifier.

use clap::Args;
use std::path::PathBuf;

/// Arguments for verifying an emitted dataset pair.
#[derive(Args, Clone, Debug)]
pub struct VerifyArgs {
    /// Path to the tabular (CSV) output file
    #[arg(long, default_value = "mock_social_media_data.csv")]
    pub csv: PathBuf,

    /// Path to the structured (JSON) output file
    #[arg(long, default_value = "mock_social_media_data.json")]
    pub json: PathBuf,

    /// Path to a schema YAML file (omit to use the built-in schema)
    #[arg(long, short = 's')]
    pub schema: Option<PathBuf>,

    /// Number of records each file is expected to hold
    #[arg(long, default_value = "200")]
    pub record_count: u64,

    /// Seed used during generation; enables exact record comparison
    #[arg(long)]
    pub seed: Option<u64>,
}

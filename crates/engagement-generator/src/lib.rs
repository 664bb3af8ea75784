//! Record generator for the social-dataset tool.
//!
//! This crate provides the `RecordGenerator`, which produces post records
//! from a `DatasetSchema`. The generator uses a seeded RNG so runs with the
//! same seed and schema are reproducible.
//!
//! # Architecture
//!
//! ```text
//! DatasetSchema (built-in default or YAML)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ RecordGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - index         │
//! └────────┬─────────┘
//!          │
//!          ▼
//!   PostRecord { post_id, post_type, likes, shares, comments, date_posted }
//! ```
//!
//! # Example
//!
//! ```rust
//! use engagement_core::DatasetSchema;
//! use engagement_generator::RecordGenerator;
//!
//! let mut generator = RecordGenerator::new(DatasetSchema::default(), 42);
//! let record = generator.next_record().unwrap();
//! assert_eq!(record.post_id, 1);
//! ```

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{GeneratorError, RecordGenerator, RecordIter};

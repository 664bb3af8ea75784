//! Core types for the social-dataset engagement generator.
//!
//! This crate defines the dataset's domain types: the post categories, the
//! engagement record itself, and the `DatasetSchema` describing which
//! categories exist, which counter ranges apply to each, and the posting-date
//! window.
//!
//! The built-in `DatasetSchema::default()` reproduces the stock mock dataset
//! (four categories, January 2025 window). Custom schemas load from YAML:
//!
//! ```rust
//! use engagement_core::DatasetSchema;
//!
//! let schema = DatasetSchema::from_yaml(r#"
//! seed: 42
//! window:
//!   start: 2025-01-01
//!   end: 2025-01-31
//! profiles:
//!   - post_type: Reel
//!     likes: { min: 400, max: 900 }
//!     shares: { min: 150, max: 400 }
//!     comments: { min: 80, max: 300 }
//! "#).unwrap();
//!
//! schema.validate().unwrap();
//! assert_eq!(schema.seed, Some(42));
//! ```

pub mod record;
pub mod schema;

pub use record::{PostRecord, PostType, UnknownPostType};
pub use schema::{CounterRange, DatasetSchema, DateWindow, EngagementProfile, SchemaError};

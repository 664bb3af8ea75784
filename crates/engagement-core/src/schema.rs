//! Dataset schema: engagement profiles, posting-date window, optional seed.
//!
//! The schema plays the role a table schema plays for a database populator:
//! it describes the shape of the data to generate, not the volume. Record
//! counts are supplied by the caller at generation time.

use crate::record::PostType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading a schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Schema defines no engagement profiles
    #[error("Schema defines no engagement profiles")]
    NoProfiles,

    /// More than one profile for the same post type
    #[error("Duplicate profile for post type '{0}'")]
    DuplicateProfile(PostType),

    /// Counter range with min above max
    #[error("Invalid {counter} range for '{post_type}': min {min} > max {max}")]
    InvalidRange {
        post_type: PostType,
        counter: &'static str,
        min: i64,
        max: i64,
    },

    /// Date window with end before start
    #[error("Invalid date window: end {end} is before start {start}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
}

/// Inclusive integer bounds for one engagement counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRange {
    pub min: i64,
    pub max: i64,
}

impl CounterRange {
    /// Create a new range with inclusive bounds.
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Whether a value falls within the inclusive bounds.
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Engagement ranges for one post category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementProfile {
    pub post_type: PostType,
    pub likes: CounterRange,
    pub shares: CounterRange,
    pub comments: CounterRange,
}

impl EngagementProfile {
    fn validate(&self) -> Result<(), SchemaError> {
        for (counter, range) in [
            ("likes", self.likes),
            ("shares", self.shares),
            ("comments", self.comments),
        ] {
            if range.min > range.max {
                return Err(SchemaError::InvalidRange {
                    post_type: self.post_type,
                    counter,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}

/// Inclusive date bounds for `Date_Posted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Create a new window with inclusive bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of whole days between the bounds.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether a date falls within the inclusive bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Dataset schema: optional seed, posting-date window, and one engagement
/// profile per post category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSchema {
    /// Seed for deterministic generation (same seed = same data).
    #[serde(default)]
    pub seed: Option<u64>,

    /// Posting-date window, inclusive of both bounds.
    #[serde(default = "default_window")]
    pub window: DateWindow,

    /// Engagement profiles, one per post category.
    #[serde(default = "default_profiles")]
    pub profiles: Vec<EngagementProfile>,
}

impl DatasetSchema {
    /// Parse a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Look up the profile for a post type.
    pub fn profile(&self, post_type: PostType) -> Option<&EngagementProfile> {
        self.profiles.iter().find(|p| p.post_type == post_type)
    }

    /// Post types covered by this schema, in profile order.
    pub fn post_types(&self) -> Vec<PostType> {
        self.profiles.iter().map(|p| p.post_type).collect()
    }

    /// Check structural invariants: at least one profile, no duplicate
    /// categories, ordered counter ranges, ordered date window.
    ///
    /// Generation assumes a validated schema; an unvalidated `min > max`
    /// range would abort the bounded draw.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.profiles.is_empty() {
            return Err(SchemaError::NoProfiles);
        }

        let mut seen = Vec::with_capacity(self.profiles.len());
        for profile in &self.profiles {
            if seen.contains(&profile.post_type) {
                return Err(SchemaError::DuplicateProfile(profile.post_type));
            }
            seen.push(profile.post_type);
            profile.validate()?;
        }

        if self.window.end < self.window.start {
            return Err(SchemaError::InvalidWindow {
                start: self.window.start,
                end: self.window.end,
            });
        }

        Ok(())
    }
}

impl Default for DatasetSchema {
    /// The stock mock dataset: four categories with fixed engagement ranges
    /// and a January 2025 posting window.
    fn default() -> Self {
        Self {
            seed: None,
            window: default_window(),
            profiles: default_profiles(),
        }
    }
}

fn default_window() -> DateWindow {
    DateWindow::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid calendar date"),
        NaiveDate::from_ymd_opt(2025, 1, 31).expect("valid calendar date"),
    )
}

fn default_profiles() -> Vec<EngagementProfile> {
    vec![
        EngagementProfile {
            post_type: PostType::Reel,
            likes: CounterRange::new(400, 900),
            shares: CounterRange::new(150, 400),
            comments: CounterRange::new(80, 300),
        },
        EngagementProfile {
            post_type: PostType::Carousel,
            likes: CounterRange::new(250, 600),
            shares: CounterRange::new(60, 200),
            comments: CounterRange::new(40, 120),
        },
        EngagementProfile {
            post_type: PostType::StaticImages,
            likes: CounterRange::new(30, 150),
            shares: CounterRange::new(5, 30),
            comments: CounterRange::new(2, 15),
        },
        EngagementProfile {
            post_type: PostType::Poll,
            likes: CounterRange::new(50, 300),
            shares: CounterRange::new(10, 50),
            comments: CounterRange::new(5, 25),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_is_valid() {
        let schema = DatasetSchema::default();
        schema.validate().unwrap();

        assert_eq!(schema.profiles.len(), 4);
        assert_eq!(schema.post_types(), PostType::ALL);
        assert_eq!(schema.window.days(), 30);
        assert!(schema.seed.is_none());
    }

    #[test]
    fn test_profile_lookup() {
        let schema = DatasetSchema::default();

        let reel = schema.profile(PostType::Reel).unwrap();
        assert_eq!(reel.likes, CounterRange::new(400, 900));
        assert_eq!(reel.shares, CounterRange::new(150, 400));
        assert_eq!(reel.comments, CounterRange::new(80, 300));

        let poll = schema.profile(PostType::Poll).unwrap();
        assert_eq!(poll.comments, CounterRange::new(5, 25));
    }

    #[test]
    fn test_from_yaml() {
        let schema = DatasetSchema::from_yaml(
            r#"
seed: 7
window:
  start: 2025-03-01
  end: 2025-03-15
profiles:
  - post_type: Poll
    likes: { min: 1, max: 10 }
    shares: { min: 0, max: 5 }
    comments: { min: 0, max: 3 }
"#,
        )
        .unwrap();

        schema.validate().unwrap();
        assert_eq!(schema.seed, Some(7));
        assert_eq!(schema.window.days(), 14);
        assert_eq!(schema.profiles.len(), 1);
        assert_eq!(schema.profiles[0].post_type, PostType::Poll);
    }

    #[test]
    fn test_yaml_defaults_fill_missing_sections() {
        // A schema carrying only a seed falls back to the stock profiles
        // and window.
        let schema = DatasetSchema::from_yaml("seed: 42").unwrap();
        assert_eq!(schema.seed, Some(42));
        assert_eq!(schema.profiles, DatasetSchema::default().profiles);
        assert_eq!(schema.window, DatasetSchema::default().window);
    }

    #[test]
    fn test_validate_rejects_empty_profiles() {
        let schema = DatasetSchema {
            profiles: vec![],
            ..DatasetSchema::default()
        };
        assert!(matches!(schema.validate(), Err(SchemaError::NoProfiles)));
    }

    #[test]
    fn test_validate_rejects_duplicate_profiles() {
        let mut schema = DatasetSchema::default();
        schema.profiles.push(schema.profiles[0].clone());
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::DuplicateProfile(PostType::Reel))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut schema = DatasetSchema::default();
        schema.profiles[1].shares = CounterRange::new(200, 60);

        match schema.validate() {
            Err(SchemaError::InvalidRange {
                post_type, counter, ..
            }) => {
                assert_eq!(post_type, PostType::Carousel);
                assert_eq!(counter, "shares");
            }
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let mut schema = DatasetSchema::default();
        std::mem::swap(&mut schema.window.start, &mut schema.window.end);
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_counter_range_contains_is_inclusive() {
        let range = CounterRange::new(5, 30);
        assert!(range.contains(5));
        assert!(range.contains(30));
        assert!(!range.contains(4));
        assert!(!range.contains(31));
    }

    #[test]
    fn test_date_window_contains_is_inclusive() {
        let window = default_window();
        assert!(window.contains(window.start));
        assert!(window.contains(window.end));
        assert!(!window.contains(window.end + chrono::Duration::days(1)));
    }
}

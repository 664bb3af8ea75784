//! The post record and its category type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a social-media post.
///
/// The category determines which engagement ranges apply when counters are
/// generated. Wire names match the dataset column values exactly
/// (`Static_images` keeps its underscore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostType {
    Reel,
    Carousel,
    #[serde(rename = "Static_images")]
    StaticImages,
    Poll,
}

impl PostType {
    /// All categories, in dataset order.
    pub const ALL: [PostType; 4] = [
        PostType::Reel,
        PostType::Carousel,
        PostType::StaticImages,
        PostType::Poll,
    ];

    /// The wire name used in both output formats.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Reel => "Reel",
            PostType::Carousel => "Carousel",
            PostType::StaticImages => "Static_images",
            PostType::Poll => "Poll",
        }
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing an unrecognized category name.
#[derive(Debug, thiserror::Error)]
#[error("Unknown post type: {0}")]
pub struct UnknownPostType(pub String);

impl std::str::FromStr for PostType {
    type Err = UnknownPostType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Reel" => Ok(PostType::Reel),
            "Carousel" => Ok(PostType::Carousel),
            "Static_images" => Ok(PostType::StaticImages),
            "Poll" => Ok(PostType::Poll),
            other => Err(UnknownPostType(other.to_string())),
        }
    }
}

/// One synthesized engagement record.
///
/// Records are immutable once generated; identifiers are unique and
/// sequential starting at 1, in generation order. Serde names match the
/// dataset columns so the structured output carries the same keys as the
/// tabular header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(rename = "Post_ID")]
    pub post_id: u64,

    #[serde(rename = "Post_Type")]
    pub post_type: PostType,

    #[serde(rename = "Likes")]
    pub likes: i64,

    #[serde(rename = "Shares")]
    pub shares: i64,

    #[serde(rename = "Comments")]
    pub comments: i64,

    /// Posting date at midnight UTC.
    #[serde(rename = "Date_Posted")]
    pub date_posted: DateTime<Utc>,
}

impl PostRecord {
    /// Column names shared by the CSV header and the JSON object keys,
    /// in field order.
    pub const COLUMNS: [&'static str; 6] = [
        "Post_ID",
        "Post_Type",
        "Likes",
        "Shares",
        "Comments",
        "Date_Posted",
    ];
}

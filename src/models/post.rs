//! Post entity.

use serde::Deserialize;

use super::{deserialize_id, deserialize_optional_id};

/// A single post within a topic.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Post {
    /// Unique identifier
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Back-reference to the owning topic; a dangling or missing value
    /// degrades to an empty slice, never an error
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub topic_id: Option<String>,
    /// Author display name
    #[serde(default)]
    pub author: Option<String>,
    /// Author rank label (falls back to "Member" when absent)
    #[serde(default)]
    pub author_rank: Option<String>,
    /// Creation timestamp as exported (left unparsed; formats vary)
    #[serde(default)]
    pub created_at: Option<String>,
    /// Post body; HTML-bearing text from the export
    #[serde(default)]
    pub content: String,
    /// Sequence number within the topic, if exported
    #[serde(default)]
    pub number: Option<u64>,
}

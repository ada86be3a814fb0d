//! Topic entity.

use serde::Deserialize;

use super::{deserialize_id, deserialize_optional_id, LastPost};

/// A topic within a forum.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Topic {
    /// Unique identifier
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Back-reference to the owning forum; a dangling or missing value
    /// degrades to an empty slice, never an error
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub forum_id: Option<String>,
    /// Topic title
    #[serde(default)]
    pub title: String,
    /// Display name of the topic starter
    #[serde(default)]
    pub author: Option<String>,
    /// Creation timestamp as exported (left unparsed; formats vary)
    #[serde(default)]
    pub created_at: Option<String>,
    /// Number of replies, as exported
    #[serde(default)]
    pub reply_count: u64,
    /// View counter, as exported
    #[serde(default)]
    pub views: u64,
    /// Summary of the most recent post, if the export carries one
    #[serde(default)]
    pub last_post: Option<LastPost>,
}

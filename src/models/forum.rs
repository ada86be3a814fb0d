//! Category and forum entities.

use serde::Deserialize;

use super::deserialize_id;

/// A category grouping forums.
///
/// Categories are optional in the dataset; when absent, all forums are
/// treated as members of one implicit default category.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Category {
    /// Unique identifier (string or integer in the source document)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Forums contained in this category
    #[serde(default)]
    pub forums: Vec<Forum>,
}

/// A forum within a category.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Forum {
    /// Unique identifier
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Short description shown under the name
    #[serde(default)]
    pub description: String,
    /// Number of topics, as exported
    #[serde(default)]
    pub topic_count: u64,
    /// Number of posts, as exported
    #[serde(default)]
    pub post_count: u64,
    /// Summary of the most recent post, if the export carries one
    #[serde(default)]
    pub last_post: Option<LastPost>,
}

/// Summary of the most recent post in a forum or topic.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LastPost {
    /// Title of the topic the post belongs to
    #[serde(default)]
    pub title: String,
    /// Author display name
    #[serde(default)]
    pub author: Option<String>,
    /// Creation timestamp as exported (left unparsed; formats vary)
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forum_defaults() {
        let forum: Forum = serde_json::from_str(r#"{"id":"f1"}"#).unwrap();
        assert_eq!(forum.id, "f1");
        assert_eq!(forum.name, "");
        assert_eq!(forum.description, "");
        assert_eq!(forum.topic_count, 0);
        assert_eq!(forum.post_count, 0);
        assert!(forum.last_post.is_none());
    }

    #[test]
    fn test_category_with_nested_forums() {
        let json = r#"{
            "id": 1,
            "name": "General",
            "forums": [{"id": "f1", "name": "Chat", "topic_count": 3}]
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, "1");
        assert_eq!(category.forums.len(), 1);
        assert_eq!(category.forums[0].topic_count, 3);
    }

    #[test]
    fn test_last_post() {
        let json = r#"{
            "id": "f1",
            "last_post": {"title": "Hello", "author": "abe", "created_at": "2024-01-01T00:00:00Z"}
        }"#;
        let forum: Forum = serde_json::from_str(json).unwrap();
        let last = forum.last_post.unwrap();
        assert_eq!(last.title, "Hello");
        assert_eq!(last.author.as_deref(), Some("abe"));
    }
}

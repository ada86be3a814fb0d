//! The fetched dataset document.

use serde::Deserialize;

use super::{Category, Forum, Post, Topic};

/// The full exported forum archive.
///
/// Every top-level key is optional in the source document; absence of a key
/// deserializes to an empty list and triggers the fallback behavior in the
/// view resolver (bare forums wrapped in a default category, empty states
/// for missing data).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ForumData {
    /// Categories with their nested forums
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Flat forum list; some exports carry forums both here and nested
    /// under categories
    #[serde(default)]
    pub forums: Vec<Forum>,
    /// All topics across all forums
    #[serde(default)]
    pub topics: Vec<Topic>,
    /// All posts across all topics
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl ForumData {
    /// Look up a forum by id, checking the flat list first and then the
    /// forums nested under categories.
    pub fn forum(&self, id: &str) -> Option<&Forum> {
        self.forums
            .iter()
            .chain(self.categories.iter().flat_map(|c| c.forums.iter()))
            .find(|f| f.id == id)
    }

    /// Look up a topic by id.
    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// Topics belonging to a forum, in dataset order.
    ///
    /// The source ordering is preserved; no implicit sort is applied.
    pub fn topics_in_forum<'a>(&'a self, forum_id: &str) -> Vec<&'a Topic> {
        self.topics
            .iter()
            .filter(|t| t.forum_id.as_deref() == Some(forum_id))
            .collect()
    }

    /// Posts belonging to a topic, in dataset order.
    pub fn posts_in_topic<'a>(&'a self, topic_id: &str) -> Vec<&'a Post> {
        self.posts
            .iter()
            .filter(|p| p.topic_id.as_deref() == Some(topic_id))
            .collect()
    }
}
